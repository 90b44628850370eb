use anyhow::Error;

use crate::api::ApiError;

/// Toast shown for every failed search, whatever the cause
pub const SEARCH_FAILURE_MESSAGE: &str = "Oops, there is no country with that name";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    NotFound,    // HTTP 404, or an empty match list
    ServerError, // HTTP 500+
    Timeout,
    ConnectionRefused,
    NetworkError, // DNS, routing, etc.
    Malformed,    // Success status, body is not a country list
    Other,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::NotFound => "not found",
            ErrorType::ServerError => "server error",
            ErrorType::Timeout => "timeout",
            ErrorType::ConnectionRefused => "connection refused",
            ErrorType::NetworkError => "network error",
            ErrorType::Malformed => "malformed response",
            ErrorType::Other => "other",
        }
    }
}

/// Classify an error based on its type and error chain
pub fn classify_error(error: &Error) -> ErrorType {
    // Status and body problems are tagged by the client itself
    if let Some(api_err) = error.downcast_ref::<ApiError>() {
        return match api_err {
            ApiError::Status(404) => ErrorType::NotFound,
            ApiError::Status(500..=599) => ErrorType::ServerError,
            ApiError::Status(_) => ErrorType::Other,
            ApiError::Malformed => ErrorType::Malformed,
        };
    }

    for cause in error.chain() {
        if let Some(reqwest_err) = cause.downcast_ref::<reqwest::Error>() {
            if reqwest_err.is_timeout() {
                return ErrorType::Timeout;
            }
            if reqwest_err.is_decode() {
                return ErrorType::Malformed;
            }
        }
    }

    let error_msg = format!("{:#}", error).to_lowercase();

    if error_msg.contains("connection refused") {
        return ErrorType::ConnectionRefused;
    }
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        return ErrorType::Timeout;
    }
    if error_msg.contains("dns") || error_msg.contains("network") {
        return ErrorType::NetworkError;
    }

    ErrorType::Other
}

/// Format error message for the debug log - show the root cause
pub fn format_error_message(error: &Error) -> String {
    // reqwest errors carry the URL and are the most useful detail
    for cause in error.chain() {
        if let Some(reqwest_err) = cause.downcast_ref::<reqwest::Error>() {
            return reqwest_err.to_string();
        }
    }

    error.root_cause().to_string()
}
