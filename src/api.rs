use std::time::Duration;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

/// Field subset requested from the search-by-name endpoint
pub const SEARCH_FIELDS: &str = "name,capital,population,flags,languages";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountryName {
    pub official: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountryFlags {
    pub svg: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountryRecord {
    pub name: CountryName,
    // Some territories (e.g. Antarctica) have no capital at all
    #[serde(default)]
    pub capital: Vec<String>,
    pub population: u64,
    pub flags: CountryFlags,
    /// Language code -> language name, in the order the API returned them
    #[serde(default)]
    pub languages: IndexMap<String, String>,
}

/// HTTP-level failures that are classified before reaching the caller
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("API returned HTTP {0}")]
    Status(u16),

    #[error("API returned a body that is not a country list")]
    Malformed,
}

/// Build the search URL for a raw query
///
/// The query is percent-encoded as a single path segment; no other
/// normalization is applied.
pub fn search_url(base_url: &str, query: &str) -> String {
    format!(
        "{}/{}?fields={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(query),
        SEARCH_FIELDS
    )
}

/// Turn a status code and response body into country records
///
/// Any non-success status is an error regardless of what the body contains.
pub fn parse_search_response(status: StatusCode, body: &str) -> Result<Vec<CountryRecord>> {
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()).into());
    }

    let records: Vec<CountryRecord> = serde_json::from_str(body)
        .map_err(|e| anyhow::Error::new(e).context(ApiError::Malformed))?;

    Ok(records)
}

#[derive(Clone)]
pub struct RestCountriesClient {
    base_url: String,
    client: Client,
}

impl RestCountriesClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search countries by (partial) name
    pub async fn search_by_name(&self, query: &str) -> Result<Vec<CountryRecord>> {
        let url = search_url(&self.base_url, query);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to search countries")?;

        let status = response.status();
        if !status.is_success() {
            // Never try to read an error body as country data
            return Err(ApiError::Status(status.as_u16()).into());
        }

        let body = response.text().await.context("Failed to read response")?;
        parse_search_response(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANADA: &str = r#"[{
        "name": {"common": "Canada", "official": "Canada", "nativeName": {}},
        "capital": ["Ottawa"],
        "population": 38000000,
        "flags": {"png": "https://flagcdn.com/w320/ca.png", "svg": "https://flagcdn.com/ca.svg"},
        "languages": {"eng": "English", "fra": "French"}
    }]"#;

    #[test]
    fn test_search_url_includes_field_filter() {
        let url = search_url("https://restcountries.com/v3.1/name", "canada");
        assert_eq!(
            url,
            "https://restcountries.com/v3.1/name/canada?fields=name,capital,population,flags,languages"
        );
    }

    #[test]
    fn test_search_url_encodes_query() {
        let url = search_url("http://localhost/name/", "united states");
        assert_eq!(
            url,
            "http://localhost/name/united%20states?fields=name,capital,population,flags,languages"
        );
    }

    #[test]
    fn test_search_url_empty_query_sent_unchanged() {
        let url = search_url("http://localhost/name", "");
        assert_eq!(url, "http://localhost/name/?fields=name,capital,population,flags,languages");
    }

    #[test]
    fn test_parse_success_body() {
        let records = parse_search_response(StatusCode::OK, CANADA).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name.official, "Canada");
        assert_eq!(records[0].capital, vec!["Ottawa".to_string()]);
        assert_eq!(records[0].population, 38_000_000);
        assert_eq!(records[0].flags.svg, "https://flagcdn.com/ca.svg");
    }

    #[test]
    fn test_parse_keeps_language_order() {
        let body = r#"[{
            "name": {"official": "Swiss Confederation"},
            "capital": ["Bern"],
            "population": 8654622,
            "flags": {"svg": "ch.svg"},
            "languages": {"roh": "Romansh", "fra": "French", "gsw": "Swiss German", "ita": "Italian"}
        }]"#;

        let records = parse_search_response(StatusCode::OK, body).unwrap();
        let names: Vec<&str> = records[0].languages.values().map(String::as_str).collect();
        assert_eq!(names, vec!["Romansh", "French", "Swiss German", "Italian"]);
    }

    #[test]
    fn test_parse_missing_capital_defaults_to_empty() {
        let body = r#"[{
            "name": {"official": "Antarctica"},
            "population": 1000,
            "flags": {"svg": "aq.svg"},
            "languages": {}
        }]"#;

        let records = parse_search_response(StatusCode::OK, body).unwrap();
        assert!(records[0].capital.is_empty());
        assert!(records[0].languages.is_empty());
    }

    #[test]
    fn test_non_success_status_is_error_even_with_valid_body() {
        let err = parse_search_response(StatusCode::NOT_FOUND, CANADA).unwrap_err();
        assert_eq!(err.downcast_ref::<ApiError>(), Some(&ApiError::Status(404)));
    }

    #[test]
    fn test_not_found_body_is_not_parsed() {
        let body = r#"{"status": 404, "message": "Not Found"}"#;
        let err = parse_search_response(StatusCode::NOT_FOUND, body).unwrap_err();
        assert_eq!(err.downcast_ref::<ApiError>(), Some(&ApiError::Status(404)));
    }

    #[test]
    fn test_malformed_success_body_is_error() {
        let err = parse_search_response(StatusCode::OK, "<html>oops</html>").unwrap_err();
        assert_eq!(err.downcast_ref::<ApiError>(), Some(&ApiError::Malformed));
    }

    #[test]
    fn test_empty_array_parses_to_no_records() {
        let records = parse_search_response(StatusCode::OK, "[]").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_client_keeps_base_url() {
        let client = RestCountriesClient::new(
            "https://restcountries.com/v3.1/name".to_string(),
            Duration::from_secs(10),
        )
        .unwrap();
        assert_eq!(client.base_url(), "https://restcountries.com/v3.1/name");
    }
}
