use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Search input at the top
    pub search_area: Rect,
    /// List region or detail region (they never show together)
    pub results_area: Rect,
    /// Hotkey legend at the bottom
    pub legend_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect) -> LayoutInfo {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search input (top border, text, bottom border)
            Constraint::Min(3),    // Results
            Constraint::Length(1), // Legend
        ])
        .split(terminal_size);

    LayoutInfo {
        search_area: chunks[0],
        results_area: chunks[1],
        legend_area: chunks[2],
    }
}
