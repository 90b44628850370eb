// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Splits the screen into search, results and legend areas
// - render: Main orchestration function that coordinates all rendering
// - search: Search input box
// - country_list: List region (2..=max matches)
// - country_info: Detail region (exactly one match)
// - legend: Hotkey legend
// - toast: Info/failure notifications

pub mod country_info;
pub mod country_list;
pub mod layout;
pub mod legend;
pub mod render;
pub mod search;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
