//! Port-id dispatch and engine configuration.

pub mod config;
pub mod engine;
