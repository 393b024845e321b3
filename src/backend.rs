//! Backend abstraction for retrieving aggregated results.

use async_trait::async_trait;

use crate::{Result, SearchResponse};

/// Trait for fetching the aggregated results for a query.
///
/// Implementations may talk to the aggregator over HTTP or serve canned
/// responses. All configuration (base URL, timeouts, missing-provider
/// policy) is set at construction time; `search` is a simple query-in,
/// response-out interface.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Fetches the aggregated results for `query`.
    async fn search(&self, query: &str) -> Result<SearchResponse>;
}
