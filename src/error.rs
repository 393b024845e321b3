//! Error types for the search client.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while requesting or decoding aggregated results.
#[derive(Error, Debug)]
pub enum SearchError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The aggregator answered with a non-success status.
    #[error("Search endpoint returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, usually a short plain-text reason.
        body: String,
    },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// A provider list was absent or null in the response.
    #[error("Response is missing results for provider '{0}'")]
    MissingProvider(String),

    /// URL parsing error.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_status() {
        let err = SearchError::Status {
            status: 400,
            body: "missing query".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Search endpoint returned status 400: missing query"
        );
    }

    #[test]
    fn test_error_display_parse() {
        let err = SearchError::Parse("invalid JSON".to_string());
        assert_eq!(err.to_string(), "Failed to parse response: invalid JSON");
    }

    #[test]
    fn test_error_display_missing_provider() {
        let err = SearchError::MissingProvider("bing".to_string());
        assert_eq!(
            err.to_string(),
            "Response is missing results for provider 'bing'"
        );
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: SearchError = json_err.into();
        assert!(matches!(err, SearchError::Parse(_)));
    }

    #[test]
    fn test_error_from_url_parse() {
        let url_err = url::Url::parse("not a url").unwrap_err();
        let err: SearchError = url_err.into();
        assert!(err.to_string().starts_with("URL parsing error"));
    }
}
