//! UI state transition logic
//!
//! Pure functions for toast lifetime and query editing.

use std::time::Duration;

/// Check whether a toast has been visible for its full lifetime
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use countrytui::logic::ui::should_dismiss_toast;
///
/// let lifetime = Duration::from_millis(3000);
/// assert!(!should_dismiss_toast(Duration::from_millis(2999), lifetime));
/// assert!(should_dismiss_toast(Duration::from_millis(3000), lifetime));
/// ```
pub fn should_dismiss_toast(elapsed: Duration, lifetime: Duration) -> bool {
    elapsed >= lifetime
}

/// Remove the last character of a query (whole char, not byte)
///
/// Returns `false` if the query was already empty.
pub fn pop_char(query: &mut String) -> bool {
    query.pop().is_some()
}
