use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(has_query: bool) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![
        Span::styled("type", Style::default().fg(Color::Yellow)),
        Span::raw(":Search  "),
    ];

    if has_query {
        hotkey_spans.extend(vec![
            Span::styled("⌫", Style::default().fg(Color::Yellow)),
            Span::raw(":Delete  "),
            Span::styled("^U", Style::default().fg(Color::Yellow)),
            Span::raw(":Clear  "),
        ]);
    }

    hotkey_spans.extend(vec![
        Span::styled("Esc/^C", Style::default().fg(Color::Yellow)),
        Span::raw(":Quit"),
    ]);

    hotkey_spans
}

pub fn render_legend(f: &mut Frame, area: Rect, has_query: bool) {
    let legend = Paragraph::new(Line::from(build_hotkey_spans(has_query)))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(legend, area);
}
