//! Command implementations for taskboard CLI

pub mod serve;

pub use serve::run_serve;
