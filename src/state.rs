//! Shared application state, constructed once at startup and injected into every route.

use crate::config::ApiSettings;
use crate::store::TriviaStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TriviaStore>,
    pub settings: Arc<ApiSettings>,
}

impl AppState {
    pub fn new(store: Arc<dyn TriviaStore>, settings: ApiSettings) -> Self {
        AppState {
            store,
            settings: Arc::new(settings),
        }
    }
}
