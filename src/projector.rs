//! JSON projection of a normalized feed.
//!
//! The projection is the card's data twin: same title fallback, same
//! sanitized links, but machine-readable. Raw upstream date strings stay
//! out of it; consumers get the formatted display date only.

use serde::{Deserialize, Serialize};

use crate::domain::{Feed, Post};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedJson {
    pub feed_title: String,
    pub last_build_date: String,
    pub items: Vec<PostJson>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostJson {
    pub title: String,
    pub link: String,
    pub date: String,
    pub tags: Vec<String>,
}

/// Project a feed into its JSON shape. Item order is preserved.
pub fn project_feed(feed: &Feed) -> FeedJson {
    FeedJson {
        feed_title: feed.title.clone(),
        last_build_date: feed.last_build_date.clone(),
        items: feed.items.iter().map(project_post).collect(),
    }
}

fn project_post(post: &Post) -> PostJson {
    PostJson {
        title: post.display_title().to_string(),
        link: post.link.clone(),
        date: post.published_display.clone(),
        tags: post.tags.clone(),
    }
}
