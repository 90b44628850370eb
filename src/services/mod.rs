//! External Services
//!
//! This module contains services that interact with external systems:
//! - api: Background search worker for the REST Countries API

pub mod api;

// Re-export commonly used types for convenience
pub use api::{SearchFailure, SearchRequest, SearchResponse};
