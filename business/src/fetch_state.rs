use crate::{EhttpFetcher, FetchService};
use lodge_states::State;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct FetchState {
    pub inner: Arc<dyn FetchService>,
}

impl FetchState {
    pub fn new(fetcher: impl FetchService + 'static) -> Self {
        Self {
            inner: Arc::new(fetcher),
        }
    }
}

impl Default for FetchState {
    fn default() -> Self {
        Self::new(EhttpFetcher)
    }
}

impl State for FetchState {}
