//! Route handlers organized by resource

pub mod health;
pub mod boards;
pub mod lists;
pub mod cards;

use serde::Serialize;

/// Body returned by successful deletes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn deleted(resource: &str) -> Self {
        Self {
            message: format!("{} deleted successfully", resource),
        }
    }
}
