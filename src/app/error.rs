use thiserror::Error;

/// Error taxonomy for the card pipeline.
///
/// `InvalidInput` is the only client-class variant and its message is safe
/// to echo back verbatim. Everything else is a dependency or internal
/// failure; the HTTP layer owns the mapping to status codes and decides
/// what, if anything, to expose.
#[derive(Error, Debug)]
pub enum CardError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Failed to fetch RSS feed ({0})")]
    UpstreamStatus(u16),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid RSS feed: {0}")]
    InvalidFeed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, CardError>;
