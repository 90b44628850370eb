use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{country_info, country_list, layout, legend, search, toast};
use crate::App;

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &App) {
    let size = f.area();
    let layout_info = layout::calculate_layout(size);
    let model = &app.model;

    search::render_search_input(
        f,
        layout_info.search_area,
        &model.ui.query,
        model.search.is_loading(),
    );

    // At most one region has content
    if let Some(card) = model.regions.detail() {
        country_info::render_country_info(f, layout_info.results_area, card);
    } else if !model.regions.list().is_empty() {
        country_list::render_country_list(f, layout_info.results_area, model.regions.list());
    } else {
        render_placeholder(f, layout_info.results_area, model.ui.query.is_empty());
    }

    legend::render_legend(f, layout_info.legend_area, !model.ui.query.is_empty());

    if let Some(active_toast) = &model.ui.toast {
        toast::render_toast(f, size, active_toast);
    }
}

fn render_placeholder(f: &mut Frame, area: Rect, query_empty: bool) {
    let hint = if query_empty {
        "Start typing a country name"
    } else {
        ""
    };

    let paragraph = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(paragraph, area);
}
