//! # trisearch
//!
//! Client side of a three-provider search aggregator.
//!
//! A search form submission is turned into one `GET /search?q=...` request
//! against the aggregator, and the returned Google, Bing and Baidu result
//! lists are rendered into three display regions:
//!
//! - Submissions never navigate; the search runs as a spawned task
//! - Each region is cleared and refilled in response order
//! - Failures are logged and leave the regions untouched
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use trisearch::{ClientConfig, HttpBackend, QueryField, QuerySubmitter, Regions, ResultRenderer, SearchForm};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = HttpBackend::new(ClientConfig::default())?;
//!     let regions = Regions::in_memory();
//!     let submitter = QuerySubmitter::new(Arc::new(backend), ResultRenderer::new(regions.clone()));
//!     let form = SearchForm::new(QueryField::new("rust programming"), submitter);
//!
//!     form.submit().task.await?;
//!
//!     for entry in regions.google.lock().await.entries() {
//!         println!("{}: {}", entry.anchor.text, entry.anchor.href);
//!     }
//!     Ok(())
//! }
//! ```

mod backend_http;
mod config;
mod error;
mod provider;
mod query;
mod result;

pub mod backend;
pub mod render;
pub mod submit;

pub use backend::SearchBackend;
pub use backend_http::HttpBackend;
pub use config::{ClientConfig, MissingProviders, DEFAULT_BASE_URL};
pub use error::{Result, SearchError};
pub use provider::Provider;
pub use query::SearchRequest;
pub use render::{Anchor, Entry, LinkTarget, MemoryRegion, Region, Regions, ResultRenderer};
pub use result::{SearchResponse, SearchResult};
pub use submit::{QueryField, QuerySubmitter, SearchForm, SubmitEvent, Submission};
