//! List region: one row per match (flag and official name)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::logic::display::ListEntry;

/// Build list rows (extracted for testability)
fn build_list_items(entries: &[ListEntry]) -> Vec<ListItem<'_>> {
    entries
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled("⚑ ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    entry.official_name.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(entry.flag_url.as_str(), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect()
}

pub fn render_country_list(f: &mut Frame, area: Rect, entries: &[ListEntry]) {
    let title = format!(" Matches ({}) ", entries.len());
    let list = List::new(build_list_items(entries))
        .block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_row_per_entry() {
        let entries = vec![
            ListEntry {
                flag_url: "https://flagcdn.com/sk.svg".to_string(),
                official_name: "Slovak Republic".to_string(),
            },
            ListEntry {
                flag_url: "https://flagcdn.com/si.svg".to_string(),
                official_name: "Republic of Slovenia".to_string(),
            },
        ];

        assert_eq!(build_list_items(&entries).len(), 2);
    }
}
