//! Request parameter resolution.
//!
//! Pure validation: every function here either returns a canonical value
//! or fails with [`CardError::InvalidInput`] carrying a message that is
//! safe to show to the caller.

use std::num::IntErrorKind;

use url::Url;

use crate::app::{CardError, Result};

pub const DEFAULT_LIMIT: usize = 1;
pub const MAX_LIMIT: usize = 10;

/// Resolve the feed URL from the three possible sources, in precedence
/// order: explicit feed URL, Medium username, configured fallback.
///
/// URLs are validated as absolute; the username is opaque text that gets
/// an `@` prefix when missing and is substituted into the Medium feed
/// template without further validation.
pub fn resolve_feed_source(
    feed_url: Option<&str>,
    username: Option<&str>,
    fallback: Option<&str>,
) -> Result<String> {
    let rss = feed_url.map(str::trim).unwrap_or("");
    if !rss.is_empty() {
        return ensure_url(rss, "Invalid RSS URL");
    }

    let username = username.map(str::trim).unwrap_or("");
    if !username.is_empty() {
        let handle = if username.starts_with('@') {
            username.to_string()
        } else {
            format!("@{username}")
        };
        return Ok(format!("https://medium.com/feed/{handle}"));
    }

    let fallback = fallback.map(str::trim).unwrap_or("");
    if !fallback.is_empty() {
        return ensure_url(fallback, "Invalid fallback feed URL");
    }

    Err(CardError::InvalidInput(
        "RSS feed URL or username is required".to_string(),
    ))
}

/// Parse the item limit: empty means the default, non-positive or
/// non-numeric values error, and anything above [`MAX_LIMIT`] clamps
/// silently instead of erroring — including positive values too large
/// to represent.
pub fn resolve_limit(raw: Option<&str>) -> Result<usize> {
    let raw = raw.map(str::trim).unwrap_or("");
    if raw.is_empty() {
        return Ok(DEFAULT_LIMIT);
    }

    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n.min(MAX_LIMIT)),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow) => Ok(MAX_LIMIT),
        _ => Err(CardError::InvalidInput(
            "Limit must be a positive integer".to_string(),
        )),
    }
}

/// Case-insensitive boolean parse against fixed truthy/falsy sets.
/// Unrecognized or absent values fall back to `default`; never errors.
pub fn resolve_boolean(raw: Option<&str>, default: bool) -> bool {
    match raw {
        Some(value) => match value.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "y" => true,
            "false" | "0" | "no" | "n" => false,
            _ => default,
        },
        None => default,
    }
}

fn ensure_url(value: &str, message: &str) -> Result<String> {
    match Url::parse(value) {
        Ok(url) => Ok(url.to_string()),
        Err(_) => Err(CardError::InvalidInput(message.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_source_prefers_explicit_url() {
        let source = resolve_feed_source(
            Some("https://example.com/feed.xml"),
            Some("alice"),
            Some("https://fallback.example/feed"),
        )
        .unwrap();
        assert_eq!(source, "https://example.com/feed.xml");
    }

    #[test]
    fn feed_source_builds_medium_url_from_username() {
        let source = resolve_feed_source(Some(""), Some("alice"), Some("")).unwrap();
        assert_eq!(source, "https://medium.com/feed/@alice");
    }

    #[test]
    fn feed_source_keeps_existing_at_prefix() {
        let source = resolve_feed_source(None, Some("@bob"), None).unwrap();
        assert_eq!(source, "https://medium.com/feed/@bob");
    }

    #[test]
    fn feed_source_uses_fallback_last() {
        let source =
            resolve_feed_source(None, None, Some("https://medium.com/feed/@team")).unwrap();
        assert_eq!(source, "https://medium.com/feed/@team");
    }

    #[test]
    fn feed_source_rejects_relative_urls() {
        assert!(matches!(
            resolve_feed_source(Some("medium.com/feed/@x"), None, None),
            Err(CardError::InvalidInput(_))
        ));
        assert!(matches!(
            resolve_feed_source(None, None, Some("not a url")),
            Err(CardError::InvalidInput(_))
        ));
    }

    #[test]
    fn feed_source_requires_some_input() {
        let err = resolve_feed_source(Some("  "), Some(""), None).unwrap_err();
        assert!(matches!(err, CardError::InvalidInput(_)));
    }

    #[test]
    fn limit_defaults_when_empty() {
        assert_eq!(resolve_limit(None).unwrap(), 1);
        assert_eq!(resolve_limit(Some("")).unwrap(), 1);
        assert_eq!(resolve_limit(Some("  ")).unwrap(), 1);
    }

    #[test]
    fn limit_rejects_non_positive_and_garbage() {
        assert!(resolve_limit(Some("0")).is_err());
        assert!(resolve_limit(Some("-3")).is_err());
        assert!(resolve_limit(Some("three")).is_err());
        assert!(resolve_limit(Some("2.5")).is_err());
    }

    #[test]
    fn limit_clamps_above_maximum() {
        assert_eq!(resolve_limit(Some("15")).unwrap(), 10);
        assert_eq!(resolve_limit(Some("10")).unwrap(), 10);
        assert_eq!(resolve_limit(Some("7")).unwrap(), 7);
    }

    #[test]
    fn limit_clamps_unrepresentable_positive_values() {
        // larger than any native integer, still a positive number
        assert_eq!(
            resolve_limit(Some("999999999999999999999999999999999999999")).unwrap(),
            10
        );
        assert!(resolve_limit(Some("-999999999999999999999999999")).is_err());
    }

    #[test]
    fn boolean_accepts_fixed_sets_case_insensitively() {
        assert!(resolve_boolean(Some("YES"), false));
        assert!(resolve_boolean(Some("1"), false));
        assert!(resolve_boolean(Some("True"), false));
        assert!(!resolve_boolean(Some("no"), true));
        assert!(!resolve_boolean(Some("0"), true));
        assert!(!resolve_boolean(Some("N"), true));
    }

    #[test]
    fn boolean_falls_back_to_default() {
        assert!(resolve_boolean(Some("maybe"), true));
        assert!(!resolve_boolean(Some("maybe"), false));
        assert!(resolve_boolean(None, true));
    }
}
