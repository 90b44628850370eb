//! UI Model
//!
//! This sub-model contains the search box text, the toast notification
//! and the quit flag.

use std::time::{Duration, Instant};

/// Receiver for one-way user notifications
pub trait Notifier {
    /// Informational message (e.g. the query matches too many countries)
    fn info(&mut self, message: &str);

    /// A search failed
    fn failure(&mut self, message: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Failure,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub shown_at: Instant,
}

#[derive(Clone, Debug)]
pub struct UiModel {
    /// Raw search-box value
    pub query: String,

    /// Active toast, if any
    pub toast: Option<Toast>,

    /// How long a toast stays on screen
    pub toast_lifetime: Duration,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(toast_lifetime: Duration) -> Self {
        Self {
            query: String::new(),
            toast: None,
            toast_lifetime,
            should_quit: false,
        }
    }

    /// Append a typed character to the query
    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
    }

    /// Delete the last character; returns whether the query changed
    pub fn backspace(&mut self) -> bool {
        crate::logic::ui::pop_char(&mut self.query)
    }

    /// Clear the whole query; returns whether the query changed
    pub fn clear_query(&mut self) -> bool {
        let changed = !self.query.is_empty();
        self.query.clear();
        changed
    }

    pub fn show_toast(&mut self, kind: ToastKind, message: &str) {
        self.toast = Some(Toast {
            kind,
            message: message.to_string(),
            shown_at: Instant::now(),
        });
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self, now: Instant) -> bool {
        match &self.toast {
            Some(toast) => crate::logic::ui::should_dismiss_toast(
                now.saturating_duration_since(toast.shown_at),
                self.toast_lifetime,
            ),
            None => false,
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }
}

impl Notifier for UiModel {
    fn info(&mut self, message: &str) {
        self.show_toast(ToastKind::Info, message);
    }

    fn failure(&mut self, message: &str) {
        self.show_toast(ToastKind::Failure, message);
    }
}
