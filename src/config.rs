//! Environment-derived configuration.
//!
//! The card service is configured entirely through environment variables
//! and CLI flags; there is no config file and no mutable global state.
//! Fixed policy values (limit bounds, card metrics, theme palettes) are
//! owned as constants by the modules that apply them.

use std::env;

pub const DEFAULT_PORT: u16 = 8787;

/// Browser-style user agent; Medium rejects the reqwest default.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0 Safari/537.36";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Fallback feed URL when a request names neither `rss` nor `username`.
    pub default_feed_url: Option<String>,
    /// Default byline / feed handle.
    pub default_username: Option<String>,
    pub user_agent: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_feed_url: None,
            default_username: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    /// Read `RSS_FEED_URL`, `MEDIUM_USERNAME` and `PORT` from the
    /// environment; blank values count as unset.
    pub fn from_env() -> Self {
        Self {
            default_feed_url: env_nonempty("RSS_FEED_URL"),
            default_username: env_nonempty("MEDIUM_USERNAME"),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }
}

fn env_nonempty(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
