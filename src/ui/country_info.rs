//! Detail region: the card for a single country

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::logic::display::CountryCard;

/// Build card lines (extracted for testability)
fn build_card_lines(card: &CountryCard) -> Vec<Line<'_>> {
    let label = Style::default().add_modifier(Modifier::BOLD);

    vec![
        Line::from(vec![
            Span::styled("⚑ ", Style::default().fg(Color::Yellow)),
            Span::styled(
                card.official_name.as_str(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            card.flag_url.as_str(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Capital: ", label),
            Span::raw(card.capital.as_str()),
        ]),
        Line::from(vec![
            Span::styled("Population: ", label),
            Span::raw(card.population.as_str()),
        ]),
        Line::from(vec![
            Span::styled("Languages: ", label),
            Span::raw(card.languages.as_str()),
        ]),
    ]
}

pub fn render_country_info(f: &mut Frame, area: Rect, card: &CountryCard) {
    let paragraph = Paragraph::new(build_card_lines(card))
        .block(Block::default().borders(Borders::ALL).title(" Country "))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
