use tokio::sync::mpsc;

use crate::api::{CountryRecord, RestCountriesClient};
use crate::logic::errors::{classify_error, format_error_message, ErrorType};

/// A search to run, tagged with the sequence number it was dispatched under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub query: String,
}

/// Classified failure, already reduced to plain data for the UI thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFailure {
    pub error_type: ErrorType,
    pub message: String,
}

impl SearchFailure {
    pub fn from_error(error: &anyhow::Error) -> Self {
        Self {
            error_type: classify_error(error),
            message: format_error_message(error),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchResponse {
    pub seq: u64,
    pub query: String,
    pub result: Result<Vec<CountryRecord>, SearchFailure>,
}

/// Search service worker that runs requests in the background
///
/// Every request runs in its own task; nothing in flight is cancelled, the
/// UI discards responses that are no longer the latest.
pub struct SearchService {
    client: RestCountriesClient,
    response_tx: mpsc::UnboundedSender<SearchResponse>,
}

impl SearchService {
    pub fn new(
        client: RestCountriesClient,
        response_tx: mpsc::UnboundedSender<SearchResponse>,
    ) -> Self {
        Self { client, response_tx }
    }

    fn dispatch(&self, request: SearchRequest) {
        let client = self.client.clone();
        let response_tx = self.response_tx.clone();

        tokio::spawn(async move {
            let response = Self::execute_request(&client, request).await;
            let _ = response_tx.send(response);
        });
    }

    /// Execute a search and return the tagged response
    pub async fn execute_request(
        client: &RestCountriesClient,
        request: SearchRequest,
    ) -> SearchResponse {
        let result = client
            .search_by_name(&request.query)
            .await
            .map_err(|e| SearchFailure::from_error(&e));

        SearchResponse {
            seq: request.seq,
            query: request.query,
            result,
        }
    }
}

/// Spawn the search service worker
pub fn spawn_search_service(
    client: RestCountriesClient,
) -> (mpsc::UnboundedSender<SearchRequest>, mpsc::UnboundedReceiver<SearchResponse>) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<SearchRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<SearchResponse>();

    tokio::spawn(async move {
        let service = SearchService::new(client, response_tx);

        while let Some(request) = request_rx.recv().await {
            crate::log_debug(&format!(
                "DEBUG [SearchService]: seq={} query={:?}",
                request.seq, request.query
            ));
            service.dispatch(request);
        }
    });

    (request_tx, response_rx)
}
