//! Debounce timing
//!
//! Pure functions for deciding when a burst of edits has settled.

use std::time::{Duration, Instant};

/// Check whether the quiet period after the last edit has elapsed
///
/// # Examples
/// ```
/// use std::time::{Duration, Instant};
/// use countrytui::logic::debounce::should_fire;
///
/// let edit = Instant::now();
/// let delay = Duration::from_millis(300);
///
/// assert!(!should_fire(edit, edit + Duration::from_millis(299), delay));
/// assert!(should_fire(edit, edit + Duration::from_millis(300), delay));
/// ```
pub fn should_fire(last_edit: Instant, now: Instant, delay: Duration) -> bool {
    now.saturating_duration_since(last_edit) >= delay
}

/// Time left until a pending edit fires (zero if already due)
pub fn remaining(last_edit: Instant, now: Instant, delay: Duration) -> Duration {
    delay.saturating_sub(now.saturating_duration_since(last_edit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_fire_within_window() {
        let edit = Instant::now();
        let delay = Duration::from_millis(300);
        assert!(!should_fire(edit, edit, delay));
        assert!(!should_fire(edit, edit + Duration::from_millis(150), delay));
    }

    #[test]
    fn test_should_fire_after_window() {
        let edit = Instant::now();
        let delay = Duration::from_millis(300);
        assert!(should_fire(edit, edit + Duration::from_millis(301), delay));
    }

    #[test]
    fn test_should_fire_clock_before_edit() {
        // now earlier than the edit saturates to zero elapsed
        let now = Instant::now();
        let edit = now + Duration::from_millis(50);
        assert!(!should_fire(edit, now, Duration::from_millis(300)));
    }

    #[test]
    fn test_remaining() {
        let edit = Instant::now();
        let delay = Duration::from_millis(300);
        assert_eq!(remaining(edit, edit + Duration::from_millis(100), delay), Duration::from_millis(200));
        assert_eq!(remaining(edit, edit + Duration::from_millis(400), delay), Duration::ZERO);
    }
}
