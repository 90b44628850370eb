//! Search Model
//!
//! Debounce and request-ordering state for the search controller.

use std::time::{Duration, Instant};

use crate::logic::debounce;

#[derive(Clone, Debug)]
pub struct SearchModel {
    /// Quiet period before a pending edit fires
    pub debounce: Duration,

    /// Time of the most recent edit not yet turned into a search
    pub pending_edit: Option<Instant>,

    /// Highest sequence number handed out (0 = nothing dispatched yet)
    pub latest_seq: u64,

    /// Requests sent whose response has not come back
    pub in_flight: usize,
}

impl SearchModel {
    pub fn new(debounce: Duration) -> Self {
        Self {
            debounce,
            pending_edit: None,
            latest_seq: 0,
            in_flight: 0,
        }
    }

    /// Record an edit; restarts the quiet period
    pub fn record_edit(&mut self, now: Instant) {
        self.pending_edit = Some(now);
    }

    /// Consume the pending edit if its quiet period has elapsed
    pub fn take_ready(&mut self, now: Instant) -> bool {
        match self.pending_edit {
            Some(edit) if debounce::should_fire(edit, now, self.debounce) => {
                self.pending_edit = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending_edit.is_some()
    }

    /// Hand out the sequence number for a new request
    pub fn next_seq(&mut self) -> u64 {
        self.latest_seq += 1;
        self.in_flight += 1;
        self.latest_seq
    }

    /// Note that a response came back; returns whether it is the latest search
    pub fn complete(&mut self, seq: u64) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        seq == self.latest_seq
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }
}
