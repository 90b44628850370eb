//! App Orchestration Methods
//!
//! `App` ties the pure model to the search service channel. Methods are
//! kept as `impl App` blocks grouped by domain:
//! - search: Debounce, dispatch and response handling

pub(crate) mod search;

use tokio::sync::mpsc;

use crate::config::Config;
use crate::model::Model;
use crate::services::SearchRequest;

pub struct App {
    pub model: Model,

    api_tx: mpsc::UnboundedSender<SearchRequest>,
}

impl App {
    pub fn new(config: &Config, api_tx: mpsc::UnboundedSender<SearchRequest>) -> Self {
        Self {
            model: Model::new(config),
            api_tx,
        }
    }
}
