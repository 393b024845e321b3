//! Rendering of aggregated results into per-provider display regions.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

use crate::{Provider, SearchResponse, SearchResult};

/// Browsing context a link opens in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkTarget {
    /// A new browsing context (`_blank`).
    #[default]
    #[serde(rename = "_blank")]
    NewContext,
}

impl LinkTarget {
    /// Returns the target attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkTarget::NewContext => "_blank",
        }
    }
}

/// A clickable link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchor {
    /// Visible text.
    pub text: String,
    /// Link destination.
    pub href: String,
    /// Where the link opens.
    pub target: LinkTarget,
}

/// One rendered result: a container element holding a single link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub anchor: Anchor,
}

impl From<&SearchResult> for Entry {
    fn from(result: &SearchResult) -> Self {
        Self {
            anchor: Anchor {
                text: result.title.clone(),
                href: result.url.clone(),
                target: LinkTarget::NewContext,
            },
        }
    }
}

/// A display region that holds rendered entries.
pub trait Region: Send {
    /// Removes all child content.
    fn clear(&mut self);

    /// Appends one entry after the existing ones.
    fn append(&mut self, entry: Entry);
}

/// A region that keeps its entries in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryRegion {
    id: String,
    entries: Vec<Entry>,
}

impl MemoryRegion {
    /// Creates an empty region with the given identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entries: Vec::new(),
        }
    }

    /// Returns the region identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the current entries.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Region for MemoryRegion {
    fn clear(&mut self) {
        self.entries.clear();
    }

    fn append(&mut self, entry: Entry) {
        self.entries.push(entry);
    }
}

/// Shared handle to a region.
pub type RegionHandle<R> = Arc<Mutex<R>>;

/// The three render targets, one per provider.
pub struct Regions<R> {
    pub google: RegionHandle<R>,
    pub bing: RegionHandle<R>,
    pub baidu: RegionHandle<R>,
}

impl<R> Regions<R> {
    /// Wraps three regions into shared handles.
    pub fn new(google: R, bing: R, baidu: R) -> Self {
        Self {
            google: Arc::new(Mutex::new(google)),
            bing: Arc::new(Mutex::new(bing)),
            baidu: Arc::new(Mutex::new(baidu)),
        }
    }

    /// Returns the handle for a provider's region.
    pub fn get(&self, provider: Provider) -> &RegionHandle<R> {
        match provider {
            Provider::Google => &self.google,
            Provider::Bing => &self.bing,
            Provider::Baidu => &self.baidu,
        }
    }
}

impl Regions<MemoryRegion> {
    /// Creates three empty in-memory regions named after their providers.
    pub fn in_memory() -> Self {
        Self::new(
            MemoryRegion::new(Provider::Google.region_id()),
            MemoryRegion::new(Provider::Bing.region_id()),
            MemoryRegion::new(Provider::Baidu.region_id()),
        )
    }
}

impl<R> Clone for Regions<R> {
    fn clone(&self) -> Self {
        Self {
            google: Arc::clone(&self.google),
            bing: Arc::clone(&self.bing),
            baidu: Arc::clone(&self.baidu),
        }
    }
}

/// Replaces the content of each region with a provider's results.
pub struct ResultRenderer<R> {
    regions: Regions<R>,
}

impl<R: Region> ResultRenderer<R> {
    /// Creates a renderer over the given regions.
    pub fn new(regions: Regions<R>) -> Self {
        Self { regions }
    }

    /// Returns the regions this renderer writes to.
    pub fn regions(&self) -> &Regions<R> {
        &self.regions
    }

    /// Clears every region and appends one entry per result, in order.
    ///
    /// All three regions are locked (in provider order) before any is
    /// written, so concurrent renders never interleave.
    pub async fn render(&self, response: &SearchResponse) {
        let mut google = self.regions.google.lock().await;
        let mut bing = self.regions.bing.lock().await;
        let mut baidu = self.regions.baidu.lock().await;

        fill(&mut *google, Provider::Google, &response.google);
        fill(&mut *bing, Provider::Bing, &response.bing);
        fill(&mut *baidu, Provider::Baidu, &response.baidu);
    }
}

fn fill<R: Region>(region: &mut R, provider: Provider, results: &[SearchResult]) {
    region.clear();
    for result in results {
        region.append(Entry::from(result));
    }
    debug!(provider = %provider, count = results.len(), "Rendered results");
}
