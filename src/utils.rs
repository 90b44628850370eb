//! Utility functions used throughout the application

use std::path::PathBuf;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("countrytui-debug.log");
    path
}

/// Keep the tail of `text` that fits in `max_width` terminal columns
///
/// Used for the search box so the end of a long query (where the cursor
/// is) stays visible.
pub fn tail_to_width(text: &str, max_width: usize) -> &str {
    if text.width() <= max_width {
        return text;
    }

    let mut width = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        start = idx;
    }
    &text[start..]
}
