pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;

use std::sync::Arc;
use config::Config;

/// Built once at start and cloned into every handler. Holds no mutable state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config: Arc::new(config),
            client: fetch::build_client(),
        }
    }
}
