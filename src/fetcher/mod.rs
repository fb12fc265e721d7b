pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;

/// Fetches a feed document as text.
///
/// One attempt per call: no conditional requests, no caching, no retry.
/// A non-success status maps to [`CardError::UpstreamStatus`].
///
/// [`CardError::UpstreamStatus`]: crate::app::CardError::UpstreamStatus
#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<String>;
}
