use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::{Toast, ToastKind};

fn toast_style(kind: ToastKind) -> (&'static str, Color) {
    match kind {
        ToastKind::Info => ("ℹ ", Color::Blue),
        ToastKind::Failure => ("✗ ", Color::Red),
    }
}

/// Centered box near the top of `area`, sized to the message
fn toast_area(area: Rect, message: &str) -> Rect {
    let max_width = area.width.min(80) as usize;
    let toast_width = (message.width() + 6).min(max_width) as u16;
    let toast_height = 4u16.min(area.height);

    Rect {
        x: area.x + area.width.saturating_sub(toast_width) / 2,
        y: area.y + 3u16.min(area.height.saturating_sub(toast_height)),
        width: toast_width,
        height: toast_height,
    }
}

/// Render a toast notification (brief pop-up message)
pub fn render_toast(f: &mut Frame, area: Rect, toast: &Toast) {
    let toast_area = toast_area(area, &toast.message);

    // Clear the area first to prevent background bleed-through
    f.render_widget(Clear, toast_area);

    let (icon, color) = toast_style(toast.kind);

    let toast_line = Line::from(vec![
        Span::styled(icon, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw(toast.message.as_str()),
    ]);

    let toast_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

    let toast_text = Paragraph::new(vec![toast_line])
        .block(toast_block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(toast_text, toast_area);
}
