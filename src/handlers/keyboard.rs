//! Keyboard Input Handler
//!
//! Edits the search box and handles quitting. Only keys that change the
//! query count as input events for the debouncer.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    handle_key_at(app, key, Instant::now());
}

/// Handle keyboard input at an explicit time (used by tests)
pub fn handle_key_at(app: &mut App, key: KeyEvent, now: Instant) {
    // Ignore release/repeat reports from terminals that send them
    if key.kind != KeyEventKind::Press {
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    let edited = match key.code {
        KeyCode::Esc => {
            app.model.ui.should_quit = true;
            false
        }
        KeyCode::Char('c') if ctrl => {
            app.model.ui.should_quit = true;
            false
        }
        KeyCode::Char('u') if ctrl => app.model.ui.clear_query(),
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            app.model.ui.push_char(c);
            true
        }
        KeyCode::Backspace => app.model.ui.backspace(),
        _ => false,
    };

    if edited {
        app.on_query_edited(now);
    }
}
