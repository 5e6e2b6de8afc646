//! In-memory `ProductSource` for driving page controllers in tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use dealshop_client::{ClientError, ProductSource};
use dealshop_core::{Product, Store};
use tokio::time::Instant;

/// A request the controller made, as seen by the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    ByStore(Store),
    Get(i64),
    Search(String),
}

/// What the source answers for a given call.
#[derive(Debug, Clone)]
pub enum Reply {
    Products(Vec<Product>),
    Status(u16),
}

#[derive(Debug, Clone)]
struct Scripted {
    delay: Duration,
    reply: Reply,
}

impl Default for Scripted {
    fn default() -> Self {
        Self {
            delay: Duration::ZERO,
            reply: Reply::Products(Vec::new()),
        }
    }
}

/// Records every call with the (paused) tokio clock time it arrived at.
#[derive(Default)]
pub struct FakeSource {
    calls: Mutex<Vec<(Call, Instant)>>,
    listing: Mutex<Scripted>,
    by_store: Mutex<Scripted>,
    searches: Mutex<HashMap<String, Scripted>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_listing(&self, reply: Reply) {
        *self.listing.lock().unwrap() = Scripted {
            delay: Duration::ZERO,
            reply,
        };
    }

    pub fn set_store_listing(&self, reply: Reply) {
        *self.by_store.lock().unwrap() = Scripted {
            delay: Duration::ZERO,
            reply,
        };
    }

    pub fn set_search(&self, query: &str, delay: Duration, reply: Reply) {
        self.searches
            .lock()
            .unwrap()
            .insert(query.to_owned(), Scripted { delay, reply });
    }

    pub fn calls(&self) -> Vec<(Call, Instant)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_kinds(&self) -> Vec<Call> {
        self.calls().into_iter().map(|(call, _)| call).collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push((call, Instant::now()));
    }

    async fn answer(scripted: Scripted) -> Result<Vec<Product>, ClientError> {
        if !scripted.delay.is_zero() {
            tokio::time::sleep(scripted.delay).await;
        }
        match scripted.reply {
            Reply::Products(products) => Ok(products),
            Reply::Status(status) => Err(status_error(status)),
        }
    }
}

impl ProductSource for FakeSource {
    async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
        self.record(Call::List);
        let scripted = self.listing.lock().unwrap().clone();
        Self::answer(scripted).await
    }

    async fn list_products_by_store(&self, store: Store) -> Result<Vec<Product>, ClientError> {
        self.record(Call::ByStore(store));
        let scripted = self.by_store.lock().unwrap().clone();
        Self::answer(scripted).await
    }

    async fn get_product(&self, id: i64) -> Result<Product, ClientError> {
        self.record(Call::Get(id));
        let scripted = self.listing.lock().unwrap().clone();
        match scripted.reply {
            Reply::Products(products) => products
                .into_iter()
                .find(|p| p.id == id)
                .ok_or_else(|| status_error(404)),
            Reply::Status(status) => Err(status_error(status)),
        }
    }

    async fn search_products(&self, query: &str) -> Result<Vec<Product>, ClientError> {
        self.record(Call::Search(query.to_owned()));
        let scripted = self
            .searches
            .lock()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_default();
        Self::answer(scripted).await
    }
}

pub fn status_error(status: u16) -> ClientError {
    ClientError::Status {
        status,
        reason: "Service Unavailable".to_owned(),
        url: "http://fake.test/products/".to_owned(),
    }
}

pub fn product(id: i64, title: &str, category: &str, store: Store) -> Product {
    Product {
        id,
        title: title.to_owned(),
        price: "499".to_owned(),
        image: format!("/media/{id}.jpg"),
        store,
        affiliate_link: format!("https://example.com/aff/{id}"),
        category: category.to_owned(),
        created_at: None,
        updated_at: None,
    }
}

/// With `start_paused = true`, sleeping lets spawned tasks run while the
/// clock auto-advances to the next timer.
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
