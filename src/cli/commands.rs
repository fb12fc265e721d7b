use std::path::PathBuf;

use crate::app::{AppContext, Result};
use crate::normalizer::parse_feed;
use crate::params::{resolve_boolean, resolve_feed_source, resolve_limit};
use crate::projector::project_feed;
use crate::render::{render_card, CardOptions, Theme};

pub struct GenerateArgs {
    pub rss: Option<String>,
    pub username: Option<String>,
    pub limit: Option<String>,
    pub theme: String,
    pub show_date: Option<String>,
    pub show_tags: Option<String>,
    pub out: PathBuf,
}

/// Fetch the feed once and write `latest.svg` and `latest.json` next to
/// each other. Both files reflect the same limited slice of posts.
pub async fn generate(ctx: &AppContext, args: GenerateArgs) -> Result<()> {
    let config = &ctx.config;

    let rss = args.rss.as_deref().or(config.default_feed_url.as_deref());
    let username = args
        .username
        .as_deref()
        .or(config.default_username.as_deref());

    let source = resolve_feed_source(rss, username, config.default_feed_url.as_deref())?;
    let limit = resolve_limit(args.limit.as_deref())?;
    let show_date = resolve_boolean(args.show_date.as_deref(), true);
    let show_tags = resolve_boolean(args.show_tags.as_deref(), true);

    let body = ctx.fetcher.fetch(&source).await?;
    let feed = parse_feed(&body)?.limited(limit);

    let options = CardOptions {
        username: username.unwrap_or("").to_string(),
        theme: Theme::from_param(&args.theme),
        show_date,
        show_tags,
        header_label: None,
    };
    let svg = render_card(&feed.items, &options);
    let json = serde_json::to_string_pretty(&project_feed(&feed))
        .map_err(|e| crate::app::CardError::Internal(e.to_string()))?;

    let json_path = args.out.join("latest.json");
    let svg_path = args.out.join("latest.svg");
    tokio::fs::write(&json_path, format!("{json}\n")).await?;
    tokio::fs::write(&svg_path, format!("{}\n", svg.trim())).await?;

    println!("Fetched {} from {}", feed.title, source);
    println!("Wrote {}", json_path.display());
    println!("Wrote {}", svg_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::app::CardError;
    use crate::config::AppConfig;
    use crate::fetcher::Fetcher;

    const FEED: &str = r#"<rss version="2.0"><channel>
        <title>Stories by Alice</title>
        <item>
            <title>Hello World</title>
            <link>https://medium.com/@alice/hello</link>
            <pubDate>Mon, 01 Jan 2024 00:00:00 GMT</pubDate>
        </item>
        <item>
            <title>Second Post</title>
            <link>https://medium.com/@alice/second</link>
        </item>
    </channel></rss>"#;

    struct StaticFetcher(&'static str);

    #[async_trait]
    impl Fetcher for StaticFetcher {
        async fn fetch(&self, _url: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    fn args(out: PathBuf) -> GenerateArgs {
        GenerateArgs {
            rss: None,
            username: Some("@alice".to_string()),
            limit: None,
            theme: "dark".to_string(),
            show_date: None,
            show_tags: None,
            out,
        }
    }

    #[tokio::test]
    async fn writes_both_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = AppContext::with_fetcher(AppConfig::default(), Arc::new(StaticFetcher(FEED)));

        generate(&ctx, args(dir.path().to_path_buf())).await.unwrap();

        let svg = std::fs::read_to_string(dir.path().join("latest.svg")).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
        assert!(svg.contains("Hello World"));
        // byline keeps the handle exactly as supplied
        assert!(svg.contains("by @alice"));

        let json = std::fs::read_to_string(dir.path().join("latest.json")).unwrap();
        assert!(json.ends_with('\n'));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["feedTitle"], "Stories by Alice");
        // default limit of one applies to both artifacts
        assert_eq!(value["items"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn limit_widens_the_slice() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = AppContext::with_fetcher(AppConfig::default(), Arc::new(StaticFetcher(FEED)));

        let mut generate_args = args(dir.path().to_path_buf());
        generate_args.limit = Some("2".to_string());
        generate(&ctx, generate_args).await.unwrap();

        let json = std::fs::read_to_string(dir.path().join("latest.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["items"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn display_flags_parse_boolean_values() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = AppContext::with_fetcher(AppConfig::default(), Arc::new(StaticFetcher(FEED)));

        let mut generate_args = args(dir.path().to_path_buf());
        generate_args.show_date = Some("no".to_string());
        generate_args.show_tags = Some("0".to_string());
        generate(&ctx, generate_args).await.unwrap();

        let svg = std::fs::read_to_string(dir.path().join("latest.svg")).unwrap();
        assert!(!svg.contains("Jan 01, 2024"));

        // unrecognized values fall back to showing the row
        let dir = tempfile::tempdir().unwrap();
        let mut generate_args = args(dir.path().to_path_buf());
        generate_args.show_date = Some("maybe".to_string());
        generate(&ctx, generate_args).await.unwrap();

        let svg = std::fs::read_to_string(dir.path().join("latest.svg")).unwrap();
        assert!(svg.contains("Jan 01, 2024"));
    }

    #[tokio::test]
    async fn fails_without_any_feed_source() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = AppContext::with_fetcher(AppConfig::default(), Arc::new(StaticFetcher(FEED)));

        let mut generate_args = args(dir.path().to_path_buf());
        generate_args.username = None;
        let err = generate(&ctx, generate_args).await.unwrap_err();
        assert!(matches!(err, CardError::InvalidInput(_)));
    }
}
