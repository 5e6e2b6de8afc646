use dealshop_core::Product;

use crate::state::ViewState;

/// Something that happened to a page: user input or a fetch outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageIntent {
    /// The search or filter text changed.
    QueryChanged(String),
    /// A fetch was dispatched.
    FetchStarted,
    /// The latest fetch succeeded.
    FetchSucceeded(Vec<Product>),
    /// The latest fetch failed; carries the user-facing message.
    FetchFailed(String),
}

/// Pure state transitions for page controllers.
pub struct PageReducer;

impl PageReducer {
    /// Applies `intent` to `state` and returns the new state.
    #[must_use]
    pub fn reduce(state: ViewState, intent: PageIntent) -> ViewState {
        match intent {
            PageIntent::QueryChanged(search_query) => ViewState {
                search_query,
                ..state
            },
            // Error is cleared before loading is raised.
            PageIntent::FetchStarted => ViewState {
                error: None,
                loading: true,
                ..state
            },
            PageIntent::FetchSucceeded(products) => ViewState {
                products,
                loading: false,
                loaded: true,
                ..state
            },
            PageIntent::FetchFailed(message) => ViewState {
                error: Some(message),
                loading: false,
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use dealshop_core::Store;

    use super::*;
    use crate::state::Phase;

    fn product(id: i64) -> Product {
        Product {
            id,
            title: format!("Product {id}"),
            price: "199".to_owned(),
            image: String::new(),
            store: Store::Meesho,
            affiliate_link: "https://example.com".to_owned(),
            category: "Misc".to_owned(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn query_changed_only_touches_query() {
        let state = ViewState {
            products: vec![product(1)],
            loaded: true,
            ..ViewState::default()
        };
        let next = PageReducer::reduce(state.clone(), PageIntent::QueryChanged("abc".to_owned()));
        assert_eq!(next.search_query, "abc");
        assert_eq!(next.products, state.products);
        assert!(!next.loading);
    }

    #[test]
    fn fetch_started_clears_error_and_sets_loading() {
        let state = ViewState {
            error: Some("old failure".to_owned()),
            ..ViewState::default()
        };
        let next = PageReducer::reduce(state, PageIntent::FetchStarted);
        assert!(next.error.is_none());
        assert!(next.loading);
        assert_eq!(next.phase(), Phase::Loading);
    }

    #[test]
    fn fetch_succeeded_replaces_products_wholesale() {
        let state = ViewState {
            products: vec![product(1), product(2)],
            loading: true,
            ..ViewState::default()
        };
        let next = PageReducer::reduce(state, PageIntent::FetchSucceeded(vec![product(3)]));
        assert_eq!(next.products, vec![product(3)]);
        assert!(!next.loading);
        assert_eq!(next.phase(), Phase::Loaded);
    }

    #[test]
    fn fetch_failed_keeps_previous_products() {
        let state = ViewState {
            products: vec![product(1)],
            loading: true,
            loaded: true,
            ..ViewState::default()
        };
        let next = PageReducer::reduce(state, PageIntent::FetchFailed("nope".to_owned()));
        assert_eq!(next.products, vec![product(1)]);
        assert_eq!(next.error.as_deref(), Some("nope"));
        assert!(!next.loading);
        assert_eq!(next.phase(), Phase::Errored);
    }
}
