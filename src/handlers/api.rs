//! API Response Handler
//!
//! Handles responses from the REST Countries background service.

use crate::logic::display::{apply_display, select_display, DisplayMode};
use crate::logic::errors::{ErrorType, SEARCH_FAILURE_MESSAGE};
use crate::model::Notifier;
use crate::services::{SearchFailure, SearchResponse};
use crate::{log_debug, App};

/// Handle a search response from background service
///
/// Responses that are not from the most recent dispatch are dropped. Every
/// failure (not found, network, malformed body, empty match list) takes the
/// same path: regions stay cleared and a failure toast is shown.
pub fn handle_search_response(app: &mut App, response: SearchResponse) {
    if !app.model.search.complete(response.seq) {
        log_debug(&format!(
            "DEBUG [SearchResult]: Dropping stale response seq={} query={:?} (latest={})",
            response.seq, response.query, app.model.search.latest_seq
        ));
        return;
    }

    let records = match response.result {
        Ok(records) => records,
        Err(failure) => {
            report_failure(app, &response.query, &failure);
            return;
        }
    };

    let display = select_display(&records, app.model.max_results);
    log_debug(&format!(
        "DEBUG [SearchResult]: seq={} query={:?} matches={} -> {}",
        response.seq,
        response.query,
        records.len(),
        display_name(&display)
    ));

    if !apply_display(display, &mut app.model.regions, &mut app.model.ui) {
        let failure = SearchFailure {
            error_type: ErrorType::NotFound,
            message: "empty match list".to_string(),
        };
        report_failure(app, &response.query, &failure);
    }
}

fn report_failure(app: &mut App, query: &str, failure: &SearchFailure) {
    log_debug(&format!(
        "{} query={:?} [{}]: {}",
        SEARCH_FAILURE_MESSAGE,
        query,
        failure.error_type.as_str(),
        failure.message
    ));
    app.model.ui.failure(SEARCH_FAILURE_MESSAGE);
}

fn display_name(display: &DisplayMode) -> &'static str {
    match display {
        DisplayMode::NoMatches => "no matches",
        DisplayMode::Detail(_) => "detail",
        DisplayMode::List(_) => "list",
        DisplayMode::TooMany { .. } => "too many",
    }
}
