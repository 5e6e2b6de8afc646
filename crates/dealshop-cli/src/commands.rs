use std::sync::Arc;
use std::time::Duration;

use anyhow::bail;
use dealshop_client::ApiClient;
use dealshop_core::Store;
use dealshop_views::{CatalogPage, StorePage, ViewState};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::render;

pub(crate) async fn list(client: ApiClient) -> anyhow::Result<()> {
    let page = CatalogPage::new(Arc::new(client), Duration::ZERO);
    page.mount();
    let state = page.settled().await;
    if let Some(error) = state.error {
        bail!(error);
    }
    print!("{}", render::render_products(&state.products));
    Ok(())
}

pub(crate) async fn store(
    client: ApiClient,
    store: Store,
    filter: Option<String>,
) -> anyhow::Result<()> {
    let page = StorePage::new(Arc::new(client), store);
    page.mount();
    let state = page.settled().await;
    if let Some(error) = state.error {
        bail!(error);
    }
    if let Some(filter) = filter {
        page.set_filter(filter);
    }

    println!("{} Products", store.display_name());
    print!("{}", render::render_products(&page.visible_products()));
    Ok(())
}

pub(crate) async fn get(client: &ApiClient, id: i64) -> anyhow::Result<()> {
    let product = client.get_product(id).await?;
    print!("{}", render::render_card(&product));
    Ok(())
}

pub(crate) async fn search(client: &ApiClient, query: &str) -> anyhow::Result<()> {
    let products = client.search_products(query).await?;
    print!("{}", render::render_products(&products));
    Ok(())
}

pub(crate) async fn health(client: &ApiClient) -> anyhow::Result<()> {
    let status = client.health_check().await?;
    println!("{}: {status}", client.base_url());
    Ok(())
}

/// Drives a `CatalogPage` from stdin until EOF, printing every visible change.
pub(crate) async fn browse(client: ApiClient, debounce_ms: u64) -> anyhow::Result<()> {
    let page = CatalogPage::new(Arc::new(client), Duration::from_millis(debounce_ms));
    let mut updates = page.subscribe();
    page.mount();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut last_shown: Option<ViewState> = None;

    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(text) => page.set_search_query(text),
                None => break,
            },
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                if last_shown.as_ref().is_some_and(|shown| !render::visibly_differs(shown, &state)) {
                    continue;
                }
                print!("{}", render::render_state(&state));
                last_shown = Some(state);
            }
        }
    }

    Ok(())
}
