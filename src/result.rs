//! Search result types.

use serde::{Deserialize, Serialize};

use crate::{MissingProviders, Provider, Result, SearchError};

/// A single search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Result title.
    pub title: String,
    /// Result URL.
    pub url: String,
}

impl SearchResult {
    /// Creates a new search result.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// The aggregated payload: one ordered result list per provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub google: Vec<SearchResult>,
    pub bing: Vec<SearchResult>,
    pub baidu: Vec<SearchResult>,
}

/// Wire shape before the missing-provider policy is applied.
#[derive(Debug, Deserialize)]
struct RawResponse {
    google: Option<Vec<SearchResult>>,
    bing: Option<Vec<SearchResult>>,
    baidu: Option<Vec<SearchResult>>,
}

impl SearchResponse {
    /// Creates an empty response.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the results for a provider.
    pub fn with_results(mut self, provider: Provider, results: Vec<SearchResult>) -> Self {
        *self.results_mut(provider) = results;
        self
    }

    /// Decodes an aggregator response body.
    ///
    /// Absent and `null` provider lists are resolved through `policy`.
    pub fn from_json(body: &str, policy: MissingProviders) -> Result<Self> {
        let raw: RawResponse = serde_json::from_str(body)?;
        Ok(Self {
            google: resolve(Provider::Google, raw.google, policy)?,
            bing: resolve(Provider::Bing, raw.bing, policy)?,
            baidu: resolve(Provider::Baidu, raw.baidu, policy)?,
        })
    }

    /// Returns the results for a provider, in response order.
    pub fn results(&self, provider: Provider) -> &[SearchResult] {
        match provider {
            Provider::Google => &self.google,
            Provider::Bing => &self.bing,
            Provider::Baidu => &self.baidu,
        }
    }

    fn results_mut(&mut self, provider: Provider) -> &mut Vec<SearchResult> {
        match provider {
            Provider::Google => &mut self.google,
            Provider::Bing => &mut self.bing,
            Provider::Baidu => &mut self.baidu,
        }
    }

    /// Total number of results across providers.
    pub fn total(&self) -> usize {
        self.google.len() + self.bing.len() + self.baidu.len()
    }
}

fn resolve(
    provider: Provider,
    results: Option<Vec<SearchResult>>,
    policy: MissingProviders,
) -> Result<Vec<SearchResult>> {
    match (results, policy) {
        (Some(results), _) => Ok(results),
        (None, MissingProviders::Empty) => Ok(Vec::new()),
        (None, MissingProviders::Reject) => {
            Err(SearchError::MissingProvider(provider.name().to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"{
        "google": [{"title": "G1", "url": "http://g.com/1"}, {"title": "G2", "url": "http://g.com/2"}],
        "bing": [{"title": "B1", "url": "http://b.com"}],
        "baidu": []
    }"#;

    #[test]
    fn test_search_result_new() {
        let result = SearchResult::new("Title", "https://example.com");
        assert_eq!(result.title, "Title");
        assert_eq!(result.url, "https://example.com");
    }

    #[test]
    fn test_from_json_keeps_order() {
        let response = SearchResponse::from_json(FULL, MissingProviders::Reject).unwrap();
        assert_eq!(response.google.len(), 2);
        assert_eq!(response.google[0].title, "G1");
        assert_eq!(response.google[1].url, "http://g.com/2");
        assert_eq!(response.bing, vec![SearchResult::new("B1", "http://b.com")]);
        assert!(response.baidu.is_empty());
        assert_eq!(response.total(), 3);
    }

    #[test]
    fn test_from_json_ignores_unknown_fields() {
        let body = r#"{"google":[{"title":"t","url":"u","snippet":"s"}],"bing":[],"baidu":[],"took_ms":12}"#;
        let response = SearchResponse::from_json(body, MissingProviders::Reject).unwrap();
        assert_eq!(response.google[0], SearchResult::new("t", "u"));
    }

    #[test]
    fn test_from_json_null_provider_rejected() {
        let body = r#"{"google":[],"bing":null,"baidu":[]}"#;
        let err = SearchResponse::from_json(body, MissingProviders::Reject).unwrap_err();
        assert!(matches!(err, SearchError::MissingProvider(ref p) if p == "bing"));
    }

    #[test]
    fn test_from_json_absent_provider_rejected() {
        let body = r#"{"google":[],"bing":[]}"#;
        let err = SearchResponse::from_json(body, MissingProviders::Reject).unwrap_err();
        assert!(matches!(err, SearchError::MissingProvider(ref p) if p == "baidu"));
    }

    #[test]
    fn test_from_json_missing_provider_as_empty() {
        let body = r#"{"google":[{"title":"t","url":"u"}],"baidu":null}"#;
        let response = SearchResponse::from_json(body, MissingProviders::Empty).unwrap();
        assert_eq!(response.google.len(), 1);
        assert!(response.bing.is_empty());
        assert!(response.baidu.is_empty());
    }

    #[test]
    fn test_from_json_invalid_body() {
        let err = SearchResponse::from_json("missing query\n", MissingProviders::Empty).unwrap_err();
        assert!(matches!(err, SearchError::Parse(_)));
    }

    #[test]
    fn test_from_json_wrong_shape() {
        let body = r#"{"google":[{"name":"t"}],"bing":[],"baidu":[]}"#;
        let err = SearchResponse::from_json(body, MissingProviders::Empty).unwrap_err();
        assert!(matches!(err, SearchError::Parse(_)));
    }

    #[test]
    fn test_results_by_provider() {
        let response = SearchResponse::new()
            .with_results(Provider::Baidu, vec![SearchResult::new("BaTitle", "http://baidu.com")]);
        assert!(response.results(Provider::Google).is_empty());
        assert_eq!(response.results(Provider::Baidu)[0].title, "BaTitle");
    }

    #[test]
    fn test_search_response_serialization() {
        let response = SearchResponse::new()
            .with_results(Provider::Google, vec![SearchResult::new("GTitle", "http://g.com")]);
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"google\":[{\"title\":\"GTitle\",\"url\":\"http://g.com\"}]"));
        assert!(json.contains("\"bing\":[]"));
    }
}
