use serde::{Deserialize, Serialize};

/// One normalized feed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Cleaned title; the normalizer guarantees this is non-empty.
    pub title: String,
    /// Absolute URL with the `source` tracking parameter removed.
    /// Empty when the entry carries no resolvable link.
    pub link: String,
    /// Original date text from the feed; may be empty.
    pub published_raw: String,
    /// `%b %d, %Y` in UTC, e.g. `Jan 01, 2024`; empty when
    /// `published_raw` is absent or unparseable.
    pub published_display: String,
    /// Deduplicated, insertion-ordered, at most three entries.
    pub tags: Vec<String>,
}

impl Post {
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }

    /// Link target for the rendered card; `#` when unresolvable.
    pub fn display_link(&self) -> &str {
        if self.link.is_empty() {
            "#"
        } else {
            &self.link
        }
    }
}
