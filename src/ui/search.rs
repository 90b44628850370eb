//! Search Input UI
//!
//! Renders the search box with the query and a blinking cursor.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::utils::tail_to_width;

const PROMPT: &str = "Country: ";

/// Build the input line; keeps the end of a long query visible
fn build_input_line(query: &str, inner_width: usize) -> Line<'_> {
    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    // Room for prompt and cursor
    let available = inner_width.saturating_sub(PROMPT.len() + 1);

    Line::from(vec![
        Span::raw(PROMPT),
        Span::raw(tail_to_width(query, available)),
        Span::styled("█", cursor_style),
    ])
}

/// Render search input box
///
/// # Arguments
/// - `f`: Ratatui frame
/// - `area`: Rectangular area to render in
/// - `query`: Current search query
/// - `loading`: Whether a search is in flight
pub fn render_search_input(f: &mut Frame, area: Rect, query: &str, loading: bool) {
    let title = if loading {
        " Search (searching...) "
    } else {
        " Search "
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(Color::Cyan));

    let inner_width = area.width.saturating_sub(2) as usize;
    let paragraph = Paragraph::new(vec![build_input_line(query, inner_width)]).block(block);

    f.render_widget(paragraph, area);
}
