//! Page state machine
//!
//! [`PageController`] ties the form to the results area. A search flips the
//! page into the loading state and spawns the fetch on the controller's
//! single-threaded tokio runtime; the caller keeps control and applies the
//! completion later with [`PageController::poll`] (TUI) or
//! [`PageController::wait`] (CLI).
//!
//! The runtime only makes progress while it is driven: [`PageController::wait`]
//! blocks on it and the TUI lends it [`PageController::drive`] between frames.
//!
//! Every search is numbered. A completion whose number is not the latest is
//! dropped, so overlapping searches resolve in the order they were issued.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::{Builder, Runtime};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender, error::TryRecvError};

use crate::form::FormHandler;
use crate::matching;
use crate::model::{Customer, SearchParams};
use crate::results::{ResultsView, select_view};
use crate::schema::{AccessorRegistry, SearchSchema};
use crate::source::{self, CustomerSource, SourceError};
use crate::ui::output::{Notifier, Toast};

/// Error shown in place of the results when the data source is unreachable
pub const UNREACHABLE_MESSAGE: &str =
    "Failed to search customers. Please ensure the customer service is running and reachable.";

pub const SEARCH_FAILED_TITLE: &str = "Search failed";
pub const NO_RESULTS_TITLE: &str = "No results found";
pub const NO_RESULTS_DESCRIPTION: &str = "Try adjusting your search criteria";

/// Snapshot of what the page shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    /// Last result set
    pub customers: Vec<Customer>,
    pub is_loading: bool,
    /// Set only after a failed fetch
    pub error: Option<String>,
    /// False until the first search, and again after a reset
    pub has_searched: bool,
}

struct Completion {
    generation: u64,
    params: SearchParams,
    outcome: source::Result<Vec<Customer>>,
}

/// Orchestrates searches against a [`CustomerSource`]
pub struct PageController {
    source: Arc<dyn CustomerSource>,
    notifier: Arc<dyn Notifier>,
    state: PageState,
    generation: u64,
    runtime: Runtime,
    tx: UnboundedSender<Completion>,
    rx: UnboundedReceiver<Completion>,
}

impl PageController {
    /// Create a controller with its own runtime
    ///
    /// # Errors
    /// Returns `SourceError::Io` if the runtime cannot be built
    pub fn new(source: Arc<dyn CustomerSource>, notifier: Arc<dyn Notifier>) -> source::Result<Self> {
        let runtime = Builder::new_current_thread()
            .thread_name("custfind-search")
            .enable_all()
            .build()?;
        let (tx, rx) = mpsc::unbounded_channel();
        Ok(Self {
            source,
            notifier,
            state: PageState::default(),
            generation: 0,
            runtime,
            tx,
            rx,
        })
    }

    #[must_use]
    pub const fn state(&self) -> &PageState {
        &self.state
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    /// Where customers are fetched from
    #[must_use]
    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// Results area for the current state
    #[must_use]
    pub fn view(&self, schema: &SearchSchema, registry: &AccessorRegistry) -> ResultsView {
        select_view(
            &self.state.customers,
            self.state.is_loading,
            self.state.error.as_deref(),
            self.state.has_searched,
            schema,
            registry,
        )
    }

    /// Forget results and errors; an in-flight search keeps loading
    pub fn reset(&mut self) {
        self.state.customers.clear();
        self.state.error = None;
        self.state.has_searched = false;
        tracing::debug!("page reset");
    }

    /// Start a search in the background and return immediately
    pub fn search(&mut self, params: SearchParams) {
        self.generation += 1;
        let generation = self.generation;
        self.state.is_loading = true;
        self.state.error = None;
        self.state.has_searched = true;
        tracing::info!(generation, source = %self.source.describe(), "search started");

        let source = Arc::clone(&self.source);
        let fetch = self.runtime.spawn(async move { source.fetch_all().await });
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let outcome = match fetch.await {
                Ok(result) => result.map(|all| matching::search(&all, &params)),
                Err(e) => Err(SourceError::Worker(e.to_string())),
            };
            // The receiver only disappears with the controller
            let _ = tx.send(Completion {
                generation,
                params,
                outcome,
            });
        });
    }

    /// Apply completions that have arrived; returns whether the state changed
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        loop {
            match self.rx.try_recv() {
                Ok(completion) => changed |= self.apply(completion),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => return changed,
            }
        }
    }

    /// Run in-flight fetches for up to `budget`
    ///
    /// Completions are queued for the next [`PageController::poll`].
    pub fn drive(&self, budget: Duration) {
        if self.state.is_loading {
            self.runtime.block_on(tokio::time::sleep(budget));
        }
    }

    /// Block until the latest search has completed
    pub fn wait(&mut self) {
        while self.state.is_loading {
            match self.runtime.block_on(self.rx.recv()) {
                Some(completion) => {
                    self.apply(completion);
                }
                None => break,
            }
        }
    }

    /// Run a search to completion
    pub fn search_blocking(&mut self, params: SearchParams) -> &PageState {
        self.search(params);
        self.wait();
        &self.state
    }

    fn apply(&mut self, completion: Completion) -> bool {
        if completion.generation != self.generation {
            tracing::debug!(
                stale = completion.generation,
                latest = self.generation,
                "dropping stale search completion"
            );
            return false;
        }

        self.state.is_loading = false;
        // A reset while loading does not hide the answer that follows
        self.state.has_searched = true;
        match completion.outcome {
            Ok(customers) => {
                tracing::info!(
                    generation = completion.generation,
                    matches = customers.len(),
                    "search finished"
                );
                if customers.is_empty() && completion.params.has_criteria() {
                    self.notifier
                        .notify(Toast::normal(NO_RESULTS_TITLE, NO_RESULTS_DESCRIPTION));
                }
                self.state.customers = customers;
            }
            Err(e) => {
                tracing::error!(error = %e, source = %self.source.describe(), "customer search failed");
                self.state.error = Some(UNREACHABLE_MESSAGE.to_string());
                self.notifier
                    .notify(Toast::destructive(SEARCH_FAILED_TITLE, UNREACHABLE_MESSAGE));
            }
        }
        true
    }
}

impl FormHandler for PageController {
    fn on_search(&mut self, params: SearchParams) {
        self.search(params);
    }

    fn on_reset(&mut self) {
        self.reset();
    }
}
