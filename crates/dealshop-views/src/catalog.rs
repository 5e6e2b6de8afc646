use std::sync::{Arc, Mutex};
use std::time::Duration;

use dealshop_client::ProductSource;
use tokio::sync::watch;
use tokio::task::AbortHandle;
use tokio::time::Instant;

use crate::dispatch::{lock, PageStore};
use crate::messages::{LOAD_FAILED, RELOAD_FAILED, SEARCH_FAILED};
use crate::reducer::PageIntent;
use crate::state::ViewState;

/// Quiet period after the last keystroke before a search request is sent.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Controller for the all-products page.
///
/// [`mount`](Self::mount) loads the full catalog. Each call to
/// [`set_search_query`](Self::set_search_query) updates the query at once and
/// (re)arms a debounce timer; only when the timer expires is a request sent,
/// either a search or, for a blank query, a full reload. Newer requests
/// supersede older ones, so a slow stale response never overwrites a fresher
/// result.
///
/// All methods that start work spawn tokio tasks and must be called from
/// within a runtime.
pub struct CatalogPage<S> {
    source: Arc<S>,
    page: Arc<PageStore>,
    debounce: Duration,
    timer: Mutex<Option<AbortHandle>>,
}

impl<S: ProductSource> CatalogPage<S> {
    #[must_use]
    pub fn new(source: Arc<S>, debounce: Duration) -> Self {
        Self {
            source,
            page: PageStore::new(),
            debounce,
            timer: Mutex::new(None),
        }
    }

    /// Starts loading the full catalog.
    pub fn mount(&self) {
        let source = Arc::clone(&self.source);
        self.page
            .dispatch("list products", LOAD_FAILED, async move { source.list_products().await });
    }

    /// Records new search text and schedules a debounced fetch for it.
    ///
    /// Any fetch scheduled by an earlier call that has not fired yet is
    /// cancelled.
    pub fn set_search_query(&self, text: impl Into<String>) {
        let text = text.into();
        self.page.apply(PageIntent::QueryChanged(text.clone()));

        // Deadline is fixed now, not when the timer task is first polled.
        let deadline = Instant::now() + self.debounce;
        let source = Arc::clone(&self.source);
        let page = Arc::clone(&self.page);
        let task = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            run_search(&source, &page, &text);
        });

        if let Some(previous) = lock(&self.timer).replace(task.abort_handle()) {
            previous.abort();
        }
    }

    /// Current state snapshot.
    #[must_use]
    pub fn state(&self) -> ViewState {
        self.page.snapshot()
    }

    /// Receiver that observes every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.page.subscribe()
    }

    /// Waits until no fetch is in flight and returns that state.
    ///
    /// A search still waiting on its debounce timer does not count as in flight.
    pub async fn settled(&self) -> ViewState {
        self.page.settled().await
    }
}

fn run_search<S: ProductSource>(source: &Arc<S>, page: &Arc<PageStore>, text: &str) {
    let query = text.trim().to_owned();
    let source = Arc::clone(source);

    if query.is_empty() {
        page.dispatch("reload products", RELOAD_FAILED, async move {
            source.list_products().await
        });
    } else {
        tracing::debug!(query = %query, "debounced search fired");
        page.dispatch("search products", SEARCH_FAILED, async move {
            source.search_products(&query).await
        });
    }
}

impl<S> Drop for CatalogPage<S> {
    fn drop(&mut self) {
        if let Some(timer) = lock(&self.timer).take() {
            timer.abort();
        }
        self.page.abort_in_flight();
    }
}
