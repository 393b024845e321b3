//! Search request construction.

use url::Url;

use crate::{ClientConfig, Result};

/// A search request for the aggregator.
///
/// The query text is sent verbatim; only percent-encoding is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// The search terms.
    pub query: String,
}

impl SearchRequest {
    /// Creates a new request with the given terms.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    /// Builds the full request URL, e.g. `http://host/search?q=rust%20lang`.
    ///
    /// The endpoint is appended to any path already on the base URL.
    pub fn url(&self, config: &ClientConfig) -> Result<Url> {
        let mut url = Url::parse(&format!(
            "{}/{}",
            config.base_url.trim_end_matches('/'),
            config.endpoint.trim_start_matches('/')
        ))?;
        url.set_query(Some(&format!(
            "{}={}",
            urlencoding::encode(&config.query_param),
            urlencoding::encode(&self.query)
        )));
        Ok(url)
    }
}
