//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **UiModel**: Search box text, toast, quit flag
//! - **DisplayRegions**: The list region and the detail region
//! - **SearchModel**: Debounce timing and request sequencing
//!
//! No I/O lives here; the runtime owns the channels and the terminal.

pub mod regions;
pub mod search;
pub mod ui;

pub use regions::DisplayRegions;
pub use search::SearchModel;
pub use ui::{Notifier, Toast, ToastKind, UiModel};

use crate::config::Config;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub ui: UiModel,

    pub regions: DisplayRegions,

    pub search: SearchModel,

    /// Above this many matches nothing is rendered
    pub max_results: usize,
}

impl Model {
    pub fn new(config: &Config) -> Self {
        Self {
            ui: UiModel::new(config.toast_duration()),
            regions: DisplayRegions::new(),
            search: SearchModel::new(config.debounce()),
            max_results: config.max_results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_model_creation() {
        let model = Model::new(&Config::default());
        assert!(model.ui.query.is_empty());
        assert!(model.regions.is_empty());
        assert_eq!(model.search.debounce, Duration::from_millis(300));
        assert_eq!(model.search.latest_seq, 0);
        assert_eq!(model.max_results, 10);
    }

    #[test]
    fn test_model_is_cloneable() {
        let model = Model::new(&Config::default());
        let _cloned = model.clone();
    }
}
