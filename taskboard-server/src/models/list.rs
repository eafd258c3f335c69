//! List - ordered sub-container belonging to one board

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::null_as_default;
use super::validation::{ValidationErrors, Validator};

const MAX_LIST_NAME_LEN: usize = 100;

/// Stored list record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: Uuid,
    pub board_id: Uuid,
    pub name: String,
    pub position: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create list request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewList {
    #[serde(deserialize_with = "null_as_default")]
    pub board_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub position: i64,
}

impl NewList {
    /// Validate the payload and return the parsed parent board id.
    ///
    /// Whether that board exists is not checked here.
    pub fn validate(&self) -> Result<Uuid, ValidationErrors> {
        let mut v = Validator::new();
        let board_id = v.required_uuid("board_id", &self.board_id);
        v.required_text("name", &self.name, 1, MAX_LIST_NAME_LEN);
        v.non_negative("position", self.position);
        v.finish()?;

        // finish() only succeeds when the uuid parsed
        Ok(board_id.unwrap_or_default())
    }

    pub fn into_list(self, board_id: Uuid, now: DateTime<Utc>) -> List {
        List {
            id: Uuid::new_v4(),
            board_id,
            name: self.name,
            position: self.position,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_list() {
        let board_id = Uuid::new_v4();
        let req = NewList {
            board_id: board_id.to_string(),
            name: "Todo".into(),
            position: 0,
        };
        assert_eq!(req.validate().unwrap(), board_id);
    }

    #[test]
    fn reports_all_violations() {
        let req = NewList {
            board_id: String::new(),
            name: "n".repeat(101),
            position: -3,
        };
        let errs = req.validate().unwrap_err();
        assert_eq!(errs.errors.len(), 3);
        assert!(errs.has("board_id", "required"));
        assert!(errs.has("name", "max"));
        assert!(errs.has("position", "gte"));
    }

    #[test]
    fn malformed_board_id() {
        let req = NewList {
            board_id: "not-a-uuid".into(),
            name: "Todo".into(),
            position: 1,
        };
        assert!(req.validate().unwrap_err().has("board_id", "uuid"));
    }

    #[test]
    fn null_position_is_zero() {
        let board_id = Uuid::new_v4();
        let req: NewList = serde_json::from_value(serde_json::json!({
            "board_id": board_id,
            "name": "Todo",
            "position": null,
        }))
        .unwrap();
        assert_eq!(req.position, 0);
        assert_eq!(req.validate().unwrap(), board_id);
    }

    #[test]
    fn into_list_keeps_parent() {
        let board_id = Uuid::new_v4();
        let now = Utc::now();
        let list = NewList {
            board_id: board_id.to_string(),
            name: "Doing".into(),
            position: 2,
        }
        .into_list(board_id, now);

        assert_eq!(list.board_id, board_id);
        assert_eq!(list.position, 2);
        assert_eq!(list.created_at, list.updated_at);
    }
}
