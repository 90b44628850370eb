//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - debounce: Quiet-period timing for search input
//! - display: Choosing between list, detail card and "too many" notice
//! - errors: Error classification for search failures
//! - formatting: Country field formatting
//! - ui: Toast lifetime and query editing

pub mod debounce;
pub mod display;
pub mod errors;
pub mod formatting;
pub mod ui;
