//! Feed normalization: raw RSS/Atom XML into [`Feed`] values.
//!
//! The document is parsed once into a generic attributed tree, classified
//! as RSS (`rss` > `channel`) or Atom (`feed`) by its root, and then run
//! through one field-extraction strategy per format. Extraction never
//! fails: missing fields degrade to the documented fallbacks, and only an
//! unparseable document or an unrecognized root is an error.

mod xml;

use chrono::{DateTime, Utc};
use url::Url;

use crate::app::{CardError, Result};
use crate::domain::{Feed, Post};
use crate::text::clean_text;

use xml::Element;

const DEFAULT_FEED_TITLE: &str = "Medium RSS Feed";
const UNTITLED: &str = "Untitled";
const MAX_TAGS: usize = 3;

enum FeedKind<'a> {
    Rss(&'a Element),
    Atom(&'a Element),
}

/// Which part of a `category` element carries the tag.
enum TagSource {
    /// RSS: element text (plain or CDATA), `term` attribute as fallback.
    Text,
    /// Atom: `term` attribute, nested text as fallback.
    TermAttribute,
}

/// Parse feed XML into a normalized [`Feed`].
///
/// Fails with [`CardError::InvalidFeed`] when the XML does not parse or
/// when neither an RSS `channel` nor an Atom `feed` root is present.
/// Entry order mirrors the source document; no sorting is performed.
pub fn parse_feed(xml_text: &str) -> Result<Feed> {
    let root = xml::parse_document(xml_text)
        .map_err(|e| CardError::InvalidFeed(e.to_string()))?
        .ok_or_else(|| CardError::InvalidFeed("document has no root element".to_string()))?;

    match classify(&root) {
        Some(FeedKind::Rss(channel)) => Ok(extract_rss(channel)),
        Some(FeedKind::Atom(feed)) => Ok(extract_atom(feed)),
        None => Err(CardError::InvalidFeed(
            "no RSS channel or Atom feed element".to_string(),
        )),
    }
}

fn classify(root: &Element) -> Option<FeedKind<'_>> {
    match root.name.as_str() {
        "rss" => root.child("channel").map(FeedKind::Rss),
        "feed" => Some(FeedKind::Atom(root)),
        _ => None,
    }
}

fn extract_rss(channel: &Element) -> Feed {
    Feed {
        title: feed_title(channel),
        last_build_date: child_text(channel, "lastBuildDate"),
        items: channel.children_named("item").map(rss_post).collect(),
    }
}

fn extract_atom(feed: &Element) -> Feed {
    Feed {
        title: feed_title(feed),
        last_build_date: child_text(feed, "updated"),
        items: feed.children_named("entry").map(atom_post).collect(),
    }
}

fn rss_post(item: &Element) -> Post {
    let published_raw = first_child_text(item, &["pubDate", "published", "updated"]);
    Post {
        title: post_title(item),
        link: sanitize_link(&resolve_link(item)),
        published_display: format_display_date(&published_raw),
        published_raw,
        tags: collect_tags(item, TagSource::Text),
    }
}

fn atom_post(entry: &Element) -> Post {
    let published_raw = first_child_text(entry, &["published", "updated"]);
    Post {
        title: post_title(entry),
        link: sanitize_link(&resolve_link(entry)),
        published_display: format_display_date(&published_raw),
        published_raw,
        tags: collect_tags(entry, TagSource::TermAttribute),
    }
}

fn feed_title(channel: &Element) -> String {
    let title = child_text(channel, "title");
    if title.is_empty() {
        DEFAULT_FEED_TITLE.to_string()
    } else {
        title
    }
}

fn post_title(entry: &Element) -> String {
    let title = child_text(entry, "title");
    if title.is_empty() {
        UNTITLED.to_string()
    } else {
        title
    }
}

/// Entry link: the `href` attribute wins on attribute-bearing elements,
/// element text (plain or CDATA) otherwise. Empty when no link child
/// carries a value.
fn resolve_link(entry: &Element) -> String {
    for link in entry.children_named("link") {
        if let Some(href) = link.attr("href") {
            let href = node_text(href);
            if !href.is_empty() {
                return href;
            }
        }
        let text = node_text(link.text());
        if !text.is_empty() {
            return text;
        }
    }
    String::new()
}

/// Strip Medium's `source` tracking parameter. Malformed links must not
/// crash the pipeline, so URL-parse failures fall back to cutting the
/// literal `?source=` suffix.
fn sanitize_link(link: &str) -> String {
    if link.is_empty() {
        return String::new();
    }

    match Url::parse(link) {
        Ok(mut url) => {
            let retained: Vec<(String, String)> = url
                .query_pairs()
                .filter(|(key, _)| key.as_ref() != "source")
                .map(|(key, value)| (key.into_owned(), value.into_owned()))
                .collect();

            if retained.len() != url.query_pairs().count() {
                if retained.is_empty() {
                    url.set_query(None);
                } else {
                    url.query_pairs_mut().clear().extend_pairs(retained);
                }
            }
            url.to_string()
        }
        Err(_) => match link.find("?source=") {
            Some(idx) => link[..idx].to_string(),
            None => link.to_string(),
        },
    }
}

fn collect_tags(entry: &Element, source: TagSource) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();

    for category in entry.children_named("category") {
        let text = node_text(category.text());
        let term = category.attr("term").map(node_text).unwrap_or_default();

        let tag = match source {
            TagSource::Text => {
                if text.is_empty() {
                    term
                } else {
                    text
                }
            }
            TagSource::TermAttribute => {
                if term.is_empty() {
                    text
                } else {
                    term
                }
            }
        };

        if tag.is_empty() || tags.contains(&tag) {
            continue;
        }
        tags.push(tag);
        if tags.len() == MAX_TAGS {
            break;
        }
    }

    tags
}

/// Format the raw date as `%b %d, %Y` in UTC (`Jan 01, 2024`).
/// Unparseable or empty input yields an empty string, never an error.
fn format_display_date(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map(|dt| dt.with_timezone(&Utc).format("%b %d, %Y").to_string())
        .unwrap_or_default()
}

/// Entity-decode and whitespace-clean one extracted value.
fn node_text(raw: &str) -> String {
    clean_text(html_escape::decode_html_entities(raw).as_ref())
}

fn child_text(parent: &Element, name: &str) -> String {
    parent
        .child(name)
        .map(|el| node_text(el.text()))
        .unwrap_or_default()
}

fn first_child_text(parent: &Element, names: &[&str]) -> String {
    names
        .iter()
        .map(|name| child_text(parent, name))
        .find(|text| !text.is_empty())
        .unwrap_or_default()
}
