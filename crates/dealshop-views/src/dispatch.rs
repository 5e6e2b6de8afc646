//! Fetch dispatch shared by the page controllers.
//!
//! Every dispatched fetch is stamped with a sequence token. Only the
//! completion carrying the latest token may touch state; a superseded fetch
//! is also aborted so it stops doing work. The token check and the state
//! update happen under the same lock as dispatch, so a stale completion can
//! never land between a newer `FetchStarted` and its outcome.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use dealshop_client::ClientError;
use dealshop_core::Product;
use tokio::sync::watch;
use tokio::task::AbortHandle;

use crate::reducer::{PageIntent, PageReducer};
use crate::state::ViewState;

#[derive(Default)]
struct InFlight {
    latest: u64,
    handle: Option<AbortHandle>,
}

pub(crate) struct PageStore {
    state: watch::Sender<ViewState>,
    in_flight: Mutex<InFlight>,
}

impl PageStore {
    pub(crate) fn new() -> Arc<Self> {
        let (state, _) = watch::channel(ViewState::default());
        Arc::new(Self {
            state,
            in_flight: Mutex::new(InFlight::default()),
        })
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    pub(crate) fn snapshot(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Waits until `loading` is clear and returns that state.
    pub(crate) async fn settled(&self) -> ViewState {
        let mut rx = self.subscribe();
        rx.wait_for(|state| !state.loading)
            .await
            .map(|state| ViewState::clone(&state))
            .unwrap_or_else(|_| self.snapshot())
    }

    pub(crate) fn apply(&self, intent: PageIntent) {
        self.state
            .send_modify(|state| *state = PageReducer::reduce(std::mem::take(state), intent));
    }

    /// Spawns `fetch` as the page's current fetch, superseding any other.
    ///
    /// On failure the error is logged and `failure_message` becomes the
    /// page's user-facing error. Must be called from within a tokio runtime.
    pub(crate) fn dispatch<F>(
        self: &Arc<Self>,
        what: &'static str,
        failure_message: &'static str,
        fetch: F,
    ) where
        F: Future<Output = Result<Vec<Product>, ClientError>> + Send + 'static,
    {
        let mut in_flight = lock(&self.in_flight);
        in_flight.latest += 1;
        let token = in_flight.latest;

        self.apply(PageIntent::FetchStarted);
        tracing::debug!(what, token, "fetch dispatched");

        let store = Arc::clone(self);
        let task = tokio::spawn(async move {
            let result = fetch.await;
            store.complete(token, what, failure_message, result);
        });

        if let Some(previous) = in_flight.handle.replace(task.abort_handle()) {
            previous.abort();
        }
    }

    fn complete(
        &self,
        token: u64,
        what: &'static str,
        failure_message: &'static str,
        result: Result<Vec<Product>, ClientError>,
    ) {
        let mut in_flight = lock(&self.in_flight);
        if token != in_flight.latest {
            tracing::debug!(what, token, latest = in_flight.latest, "discarding stale response");
            return;
        }
        in_flight.handle = None;

        match result {
            Ok(products) => {
                tracing::debug!(what, token, count = products.len(), "fetch applied");
                self.apply(PageIntent::FetchSucceeded(products));
            }
            Err(e) => {
                tracing::error!(what, token, error = %e, "fetch failed");
                self.apply(PageIntent::FetchFailed(failure_message.to_owned()));
            }
        }
    }

    /// Aborts the in-flight fetch, if any, without touching state.
    pub(crate) fn abort_in_flight(&self) {
        if let Some(handle) = lock(&self.in_flight).handle.take() {
            handle.abort();
        }
    }
}

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
