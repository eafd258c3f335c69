//! Card - leaf entity belonging to one list

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::null_as_default;
use super::validation::{ValidationErrors, Validator};

const MAX_CARD_TITLE_LEN: usize = 200;
const MAX_CARD_DESCRIPTION_LEN: usize = 1000;

/// Stored card record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: Uuid,
    pub list_id: Uuid,
    pub title: String,
    pub description: String,
    pub position: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create card request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewCard {
    #[serde(deserialize_with = "null_as_default")]
    pub list_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub position: i64,
}

impl NewCard {
    /// Validate the payload and return the parsed parent list id.
    pub fn validate(&self) -> Result<Uuid, ValidationErrors> {
        let mut v = Validator::new();
        let list_id = v.required_uuid("list_id", &self.list_id);
        v.required_text("title", &self.title, 1, MAX_CARD_TITLE_LEN);
        v.optional_text("description", &self.description, MAX_CARD_DESCRIPTION_LEN);
        v.non_negative("position", self.position);
        v.finish()?;

        Ok(list_id.unwrap_or_default())
    }

    pub fn into_card(self, list_id: Uuid, now: DateTime<Utc>) -> Card {
        Card {
            id: Uuid::new_v4(),
            list_id,
            title: self.title,
            description: self.description,
            position: self.position,
            created_at: now,
            updated_at: now,
        }
    }
}
