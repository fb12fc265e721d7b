pub mod feed;
pub mod post;

pub use feed::Feed;
pub use post::Post;
