//! The fixed set of upstream providers behind the aggregator.

use std::fmt;

use serde::Serialize;

/// An upstream search provider whose results the aggregator returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Google,
    Bing,
    Baidu,
}

impl Provider {
    /// All providers, in render order.
    pub const ALL: [Provider; 3] = [Provider::Google, Provider::Bing, Provider::Baidu];

    /// Field name of this provider in the aggregator response.
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Google => "google",
            Provider::Bing => "bing",
            Provider::Baidu => "baidu",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Provider::Google => "Google",
            Provider::Bing => "Bing",
            Provider::Baidu => "Baidu",
        }
    }

    /// Identifier of the display region that holds this provider's results.
    pub fn region_id(&self) -> &'static str {
        match self {
            Provider::Google => "googleResults",
            Provider::Bing => "bingResults",
            Provider::Baidu => "baiduResults",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
