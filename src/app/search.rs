//! Search orchestration methods
//!
//! Methods for the debounced search pipeline:
//! - Recording edits and firing the debouncer
//! - Clearing the display regions and dispatching a tagged request
//! - Routing responses to the renderer or the failure path

use std::time::{Duration, Instant};

use crate::logic::{debounce, errors::SEARCH_FAILURE_MESSAGE};
use crate::model::Notifier;
use crate::services::{SearchRequest, SearchResponse};
use crate::{handlers, log_debug, App};

/// Longest the event loop sleeps when nothing is pending
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Poll interval while a response is outstanding
const LOADING_POLL: Duration = Duration::from_millis(50);

impl App {
    /// Record an edit of the search box; restarts the debounce window
    pub fn on_query_edited(&mut self, now: Instant) {
        self.model.search.record_edit(now);
    }

    /// Advance timers: expire the toast and fire a settled search
    pub fn tick(&mut self, now: Instant) {
        if self.model.ui.should_dismiss_toast(now) {
            self.model.ui.dismiss_toast();
        }

        if self.model.search.take_ready(now) {
            self.dispatch_search();
        }
    }

    /// How long the event loop may wait for input before the next `tick`
    pub fn next_wake(&self, now: Instant) -> Duration {
        let idle = if self.model.search.is_loading() {
            LOADING_POLL
        } else {
            IDLE_POLL
        };

        match self.model.search.pending_edit {
            Some(edit) => debounce::remaining(edit, now, self.model.search.debounce).min(idle),
            None => idle,
        }
    }

    /// Clear both regions and send the current query to the search service
    ///
    /// The regions are cleared before the request leaves, so no result from
    /// an earlier search can remain visible. Returns the request's sequence
    /// number.
    pub fn dispatch_search(&mut self) -> u64 {
        let query = self.model.ui.query.clone();

        self.model.regions.clear();
        let seq = self.model.search.next_seq();

        log_debug(&format!("DEBUG [Search]: dispatch seq={} query={:?}", seq, query));

        if self.api_tx.send(SearchRequest { seq, query }).is_err() {
            // Worker is gone; nothing will ever answer this request
            log_debug("DEBUG [Search]: search service channel closed");
            self.model.search.complete(seq);
            self.model.ui.failure(SEARCH_FAILURE_MESSAGE);
        }

        seq
    }

    /// Handle a response from the background search service
    /// Delegated to handlers::api module
    pub fn handle_search_response(&mut self, response: SearchResponse) {
        handlers::handle_search_response(self, response);
    }
}
