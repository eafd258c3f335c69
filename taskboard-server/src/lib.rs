//! taskboard-server: boards, lists and cards over HTTP
//!
//! Entities live in an in-memory [`Store`] that is created by the caller
//! and handed to the router; nothing survives a restart.

pub mod http;
pub mod models;
pub mod store;

pub use http::{build_router, run_server, ServerConfig, ServerError};
pub use models::{Board, Card, List};
pub use store::Store;
