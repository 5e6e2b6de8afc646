use dealshop_core::Product;

/// Where a page is in its fetch lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing fetched yet.
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// Everything a page needs to render.
///
/// `products` and `error` can both be set: a failed refresh keeps the
/// previously loaded products on screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub products: Vec<Product>,
    /// `true` exactly while the latest fetch is in flight.
    pub loading: bool,
    pub error: Option<String>,
    pub search_query: String,
    /// At least one fetch has completed successfully.
    pub loaded: bool,
}

impl ViewState {
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Errored
        } else if self.loaded {
            Phase::Loaded
        } else {
            Phase::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        assert_eq!(ViewState::default().phase(), Phase::Idle);
    }

    #[test]
    fn loading_wins_over_stale_error() {
        let state = ViewState {
            loading: true,
            error: Some("old".to_owned()),
            ..ViewState::default()
        };
        assert_eq!(state.phase(), Phase::Loading);
    }

    #[test]
    fn error_wins_over_loaded() {
        let state = ViewState {
            loaded: true,
            error: Some("boom".to_owned()),
            ..ViewState::default()
        };
        assert_eq!(state.phase(), Phase::Errored);
    }
}
