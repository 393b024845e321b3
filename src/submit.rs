//! Query submission: form events, the query field, and the fire-and-forget
//! search task.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::backend::SearchBackend;
use crate::render::{Region, ResultRenderer};

/// A form submission event.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppresses the default navigation for this submission.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// The text input holding the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryField {
    value: String,
}

impl QueryField {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Returns the current text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the current text.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

/// Handles submissions by fetching results and rendering them.
pub struct QuerySubmitter<R> {
    backend: Arc<dyn SearchBackend>,
    renderer: Arc<ResultRenderer<R>>,
}

impl<R> Clone for QuerySubmitter<R> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            renderer: Arc::clone(&self.renderer),
        }
    }
}

impl<R: Region + 'static> QuerySubmitter<R> {
    /// Creates a submitter that searches through `backend` and renders with `renderer`.
    pub fn new(backend: Arc<dyn SearchBackend>, renderer: ResultRenderer<R>) -> Self {
        Self {
            backend,
            renderer: Arc::new(renderer),
        }
    }

    /// Returns the renderer.
    pub fn renderer(&self) -> &ResultRenderer<R> {
        &self.renderer
    }

    /// Handles a submit event for the current value of `input`.
    ///
    /// Prevents the default action, spawns the search and returns at once.
    /// Dropping the returned handle leaves the task running. Failures are
    /// logged and leave every region untouched. In-flight tasks are never
    /// cancelled, so the last one to finish determines what is shown.
    pub fn handle_submit(&self, event: &mut SubmitEvent, input: &QueryField) -> JoinHandle<()> {
        event.prevent_default();

        let query = input.value().to_string();
        let backend = Arc::clone(&self.backend);
        let renderer = Arc::clone(&self.renderer);

        debug!(query = %query, "Submitting search");
        tokio::spawn(async move {
            match backend.search(&query).await {
                Ok(response) => {
                    debug!(query = %query, count = response.total(), "Search succeeded");
                    renderer.render(&response).await;
                }
                Err(e) => {
                    error!(query = %query, error = %e, "Search failed");
                }
            }
        })
    }
}

/// The outcome of dispatching a submit event.
#[derive(Debug)]
pub struct Submission {
    /// The dispatched event, after handlers ran.
    pub event: SubmitEvent,
    /// The spawned search task.
    pub task: JoinHandle<()>,
}

/// A search form: a query field wired to a submitter.
pub struct SearchForm<R> {
    input: QueryField,
    submitter: QuerySubmitter<R>,
}

impl<R: Region + 'static> SearchForm<R> {
    pub fn new(input: QueryField, submitter: QuerySubmitter<R>) -> Self {
        Self { input, submitter }
    }

    pub fn input(&self) -> &QueryField {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut QueryField {
        &mut self.input
    }

    pub fn submitter(&self) -> &QuerySubmitter<R> {
        &self.submitter
    }

    /// Dispatches a submit event to the submitter.
    pub fn submit(&self) -> Submission {
        let mut event = SubmitEvent::new();
        let task = self.submitter.handle_submit(&mut event, &self.input);
        Submission { event, task }
    }
}
