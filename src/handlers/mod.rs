//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - api: Search responses from the background service
//! - keyboard: User keyboard input

pub mod api;
pub mod keyboard;

// Re-export for convenience
pub use api::handle_search_response;
pub use keyboard::handle_key;
