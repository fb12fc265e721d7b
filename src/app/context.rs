use std::sync::Arc;

use crate::config::AppConfig;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;

/// Wires the configuration and the feed fetcher together for the
/// HTTP service and the CLI commands.
pub struct AppContext {
    pub config: AppConfig,
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let fetcher: Arc<dyn Fetcher + Send + Sync> =
            Arc::new(HttpFetcher::new(&config.user_agent));
        Self { config, fetcher }
    }

    /// Context with an injected fetcher; used by tests.
    pub fn with_fetcher(config: AppConfig, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        Self { config, fetcher }
    }
}
