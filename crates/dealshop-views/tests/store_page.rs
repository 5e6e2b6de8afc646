//! Tests for `StorePage`: single fetch on mount, local-only filtering.

mod common;

use std::sync::Arc;

use common::{product, Call, FakeSource, Reply};
use dealshop_core::{Product, Store};
use dealshop_views::messages::LOAD_FAILED;
use dealshop_views::{Phase, StorePage};

fn flipkart_products() -> Vec<Product> {
    vec![
        product(1, "Red Shoe", "Footwear", Store::Flipkart),
        product(2, "Blue Hat", "Apparel", Store::Flipkart),
    ]
}

fn titles(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.title.as_str()).collect()
}

#[tokio::test(start_paused = true)]
async fn mount_fetches_products_for_its_store() {
    let source = Arc::new(FakeSource::new());
    source.set_store_listing(Reply::Products(flipkart_products()));
    let page = StorePage::new(Arc::clone(&source), Store::Flipkart);

    page.mount();
    let state = page.settled().await;

    assert_eq!(source.call_kinds(), vec![Call::ByStore(Store::Flipkart)]);
    assert_eq!(state.products, flipkart_products());
    assert_eq!(state.phase(), Phase::Loaded);
    assert_eq!(page.store(), Store::Flipkart);
}

#[tokio::test(start_paused = true)]
async fn filter_narrows_by_title_or_category_without_fetching() {
    let source = Arc::new(FakeSource::new());
    source.set_store_listing(Reply::Products(flipkart_products()));
    let page = StorePage::new(Arc::clone(&source), Store::Flipkart);
    page.mount();
    page.settled().await;

    page.set_filter("shoe");
    assert_eq!(titles(&page.visible_products()), vec!["Red Shoe"]);

    page.set_filter("APPAREL");
    assert_eq!(titles(&page.visible_products()), vec!["Blue Hat"]);

    page.set_filter("");
    assert_eq!(
        titles(&page.visible_products()),
        vec!["Red Shoe", "Blue Hat"]
    );

    assert_eq!(source.calls().len(), 1, "filtering must not issue requests");
    assert_eq!(page.state().products.len(), 2, "filter never mutates state products");
}

#[tokio::test(start_paused = true)]
async fn mount_failure_sets_static_message() {
    let source = Arc::new(FakeSource::new());
    source.set_store_listing(Reply::Status(502));
    let page = StorePage::new(Arc::clone(&source), Store::Myntra);

    page.mount();
    let state = page.settled().await;

    assert_eq!(state.error.as_deref(), Some(LOAD_FAILED));
    assert!(!state.loading);
    assert!(page.visible_products().is_empty());
}
