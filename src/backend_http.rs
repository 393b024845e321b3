//! HTTP-based backend using reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::backend::SearchBackend;
use crate::{ClientConfig, Result, SearchError, SearchRequest, SearchResponse};

/// A backend that issues `GET {endpoint}?q=...` against the aggregator.
///
/// No retries are attempted. A timeout is applied only when the config
/// sets one.
pub struct HttpBackend {
    client: Client,
    config: ClientConfig,
}

impl HttpBackend {
    /// Creates a new `HttpBackend` from the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder =
            Client::builder().user_agent(concat!("trisearch/", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    /// Creates an `HttpBackend` with a custom reqwest client.
    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl SearchBackend for HttpBackend {
    async fn search(&self, query: &str) -> Result<SearchResponse> {
        let url = SearchRequest::new(query).url(&self.config)?;
        debug!(url = %url, "Sending search request");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(status = %status, bytes = body.len(), "Received search response");

        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }

        SearchResponse::from_json(&body, self.config.missing_providers)
    }
}
