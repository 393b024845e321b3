//! Client configuration.

use serde::{Deserialize, Serialize};

/// Default aggregator address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// How to treat a provider list that is absent or `null` in a response.
///
/// The aggregator writes `null` for a provider whose upstream failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingProviders {
    /// Reject the whole response; nothing is rendered.
    #[default]
    Reject,
    /// Treat the missing list as empty.
    Empty,
}

/// Configuration for talking to the search aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Aggregator address; may carry a path prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the search endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Name of the query parameter.
    #[serde(default = "default_query_param")]
    pub query_param: String,
    /// Policy for absent provider lists.
    #[serde(default)]
    pub missing_providers: MissingProviders,
    /// Request timeout in seconds. `None` waits indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_endpoint() -> String {
    "/search".to_string()
}

fn default_query_param() -> String {
    "q".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            endpoint: default_endpoint(),
            query_param: default_query_param(),
            missing_providers: MissingProviders::default(),
            timeout_secs: None,
        }
    }
}

impl ClientConfig {
    /// Sets the aggregator base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the endpoint path.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets the query parameter name.
    pub fn with_query_param(mut self, name: impl Into<String>) -> Self {
        self.query_param = name.into();
        self
    }

    /// Sets the missing-provider policy.
    pub fn with_missing_providers(mut self, policy: MissingProviders) -> Self {
        self.missing_providers = policy;
        self
    }

    /// Sets a request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.endpoint, "/search");
        assert_eq!(config.query_param, "q");
        assert_eq!(config.missing_providers, MissingProviders::Reject);
        assert!(config.timeout_secs.is_none());
    }

    #[test]
    fn test_client_config_builder_chain() {
        let config = ClientConfig::default()
            .with_base_url("http://search.internal:9000")
            .with_endpoint("/api/search")
            .with_query_param("query")
            .with_missing_providers(MissingProviders::Empty)
            .with_timeout_secs(3);
        assert_eq!(config.base_url, "http://search.internal:9000");
        assert_eq!(config.endpoint, "/api/search");
        assert_eq!(config.query_param, "query");
        assert_eq!(config.missing_providers, MissingProviders::Empty);
        assert_eq!(config.timeout_secs, Some(3));
    }

    #[test]
    fn test_client_config_deserialization_defaults() {
        let json = r#"{"base_url":"http://example.com"}"#;
        let config: ClientConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.base_url, "http://example.com");
        assert_eq!(config.endpoint, "/search"); // default
        assert_eq!(config.query_param, "q"); // default
        assert_eq!(config.missing_providers, MissingProviders::Reject);
    }

    #[test]
    fn test_missing_providers_serialization() {
        let json = serde_json::to_string(&MissingProviders::Empty).unwrap();
        assert_eq!(json, "\"empty\"");
        let policy: MissingProviders = serde_json::from_str("\"reject\"").unwrap();
        assert_eq!(policy, MissingProviders::Reject);
    }
}
