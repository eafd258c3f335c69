//! Board - top-level container

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::null_as_default;
use super::validation::{ValidationErrors, Validator};

/// Maximum length for board names
const MAX_BOARD_NAME_LEN: usize = 100;

/// Maximum length for board descriptions
const MAX_BOARD_DESCRIPTION_LEN: usize = 500;

/// Stored board record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create board request
///
/// Any `id` or timestamps in the payload are ignored; the server assigns them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewBoard {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

impl NewBoard {
    /// Check the payload against the board rules.
    ///
    /// # Rules
    /// - `name`: required, 1..=100 characters
    /// - `description`: at most 500 characters
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        v.required_text("name", &self.name, 1, MAX_BOARD_NAME_LEN);
        v.optional_text("description", &self.description, MAX_BOARD_DESCRIPTION_LEN);
        v.finish()
    }

    /// Stamp a fresh id and timestamps.
    pub fn into_board(self, now: DateTime<Utc>) -> Board {
        Board {
            id: Uuid::new_v4(),
            name: self.name,
            description: self.description,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_board(name: &str) -> NewBoard {
        NewBoard {
            name: name.into(),
            description: String::new(),
        }
    }

    #[test]
    fn valid_board() {
        assert!(new_board("Sprint").validate().is_ok());
        assert!(new_board("a").validate().is_ok());
    }

    #[test]
    fn rejects_empty_name() {
        let errs = new_board("").validate().unwrap_err();
        assert!(errs.has("name", "required"));
        assert_eq!(errs.errors.len(), 1);
    }

    #[test]
    fn max_length() {
        assert!(new_board(&"a".repeat(100)).validate().is_ok());

        let errs = new_board(&"a".repeat(101)).validate().unwrap_err();
        assert_eq!(errs.errors[0].tag, "max");
        assert_eq!(errs.errors[0].value, "100");
    }

    #[test]
    fn description_limit() {
        let mut board = new_board("Sprint");
        board.description = "d".repeat(500);
        assert!(board.validate().is_ok());

        board.description.push('d');
        assert!(board.validate().unwrap_err().has("description", "max"));
    }

    #[test]
    fn missing_fields_default() {
        let board: NewBoard = serde_json::from_str("{}").unwrap();
        assert!(board.validate().unwrap_err().has("name", "required"));
    }

    #[test]
    fn null_fields_read_as_empty() {
        let board: NewBoard = serde_json::from_str(r#"{"name": "x", "description": null}"#).unwrap();
        assert_eq!(board.description, "");
        assert!(board.validate().is_ok());

        let board: NewBoard = serde_json::from_str(r#"{"name": null}"#).unwrap();
        let errs = board.validate().unwrap_err();
        assert!(errs.has("name", "required"));
        assert_eq!(errs.errors.len(), 1);
    }

    #[test]
    fn client_ids_are_ignored() {
        let req: NewBoard = serde_json::from_str(
            r#"{"id": "fixed", "name": "Sprint", "created_at": "2000-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        let now = Utc::now();
        let board = req.into_board(now);

        assert_eq!(board.name, "Sprint");
        assert_eq!(board.created_at, now);
        assert_eq!(board.created_at, board.updated_at);
    }

    #[test]
    fn ids_are_unique() {
        let now = Utc::now();
        let a = new_board("a").into_board(now);
        let b = new_board("a").into_board(now);
        assert_ne!(a.id, b.id);
    }
}
