use std::sync::Arc;

use dealshop_client::ProductSource;
use dealshop_core::{Product, Store};
use tokio::sync::watch;

use crate::dispatch::PageStore;
use crate::filter::filter_products;
use crate::messages::LOAD_FAILED;
use crate::reducer::PageIntent;
use crate::state::ViewState;

/// Controller for a single store's page.
///
/// Fetches the store's products once on [`mount`](Self::mount); the filter
/// text only narrows the already-fetched list and never triggers a request.
pub struct StorePage<S> {
    source: Arc<S>,
    store: Store,
    page: Arc<PageStore>,
}

impl<S: ProductSource> StorePage<S> {
    #[must_use]
    pub fn new(source: Arc<S>, store: Store) -> Self {
        Self {
            source,
            store,
            page: PageStore::new(),
        }
    }

    #[must_use]
    pub fn store(&self) -> Store {
        self.store
    }

    /// Starts loading this store's products. Must be called within a tokio runtime.
    pub fn mount(&self) {
        let source = Arc::clone(&self.source);
        let store = self.store;
        self.page.dispatch("list products by store", LOAD_FAILED, async move {
            source.list_products_by_store(store).await
        });
    }

    /// Updates the local filter text.
    pub fn set_filter(&self, text: impl Into<String>) {
        self.page.apply(PageIntent::QueryChanged(text.into()));
    }

    /// Products that pass the current filter, recomputed on every call.
    #[must_use]
    pub fn visible_products(&self) -> Vec<Product> {
        let state = self.page.snapshot();
        filter_products(&state.products, &state.search_query)
            .into_iter()
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn state(&self) -> ViewState {
        self.page.snapshot()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.page.subscribe()
    }

    /// Waits until the mount fetch has finished and returns that state.
    pub async fn settled(&self) -> ViewState {
        self.page.settled().await
    }
}

impl<S> Drop for StorePage<S> {
    fn drop(&mut self) {
        self.page.abort_in_flight();
    }
}
