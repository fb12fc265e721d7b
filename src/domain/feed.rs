use serde::{Deserialize, Serialize};

use crate::domain::Post;

/// A normalized RSS/Atom feed.
///
/// Built once per fetch by the normalizer and never mutated afterwards:
/// consumers that need fewer items call [`Feed::limited`], which produces
/// a new value. Item order mirrors the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    pub title: String,
    /// Raw `lastBuildDate` (RSS) / `updated` (Atom) text; may be empty.
    pub last_build_date: String,
    pub items: Vec<Post>,
}

impl Feed {
    /// Copy of this feed with at most `limit` items, source order kept.
    pub fn limited(&self, limit: usize) -> Feed {
        Feed {
            title: self.title.clone(),
            last_build_date: self.last_build_date.clone(),
            items: self.items.iter().take(limit).cloned().collect(),
        }
    }
}
