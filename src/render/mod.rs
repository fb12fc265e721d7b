//! Card rendering: deterministic layout and SVG emission.
//!
//! [`render_card`] is a pure, total function of its inputs. Sparse posts
//! degrade (placeholder title, `#` anchor, omitted optional rows) instead
//! of failing, and every feed-sourced string passes through
//! [`escape_markup`] before it is embedded in the markup.

pub mod theme;

pub use theme::{Theme, ThemeTokens};

use crate::domain::Post;
use crate::text::{escape_markup, truncate, wrap_text};

const CARD_WIDTH: u32 = 550;
const HEADER_HEIGHT: u32 = 110;
const TITLE_LINE_HEIGHT: u32 = 18;
const MAX_TITLE_CHARS: usize = 52;
const DATE_ROW_HEIGHT: u32 = 16;
const TAG_ROW_HEIGHT: u32 = 20;
const CONTENT_PADDING: u32 = 14;
const ITEM_GAP: u32 = 14;
const BOTTOM_MARGIN: u32 = 20;

const MAX_TAG_CHARS: usize = 14;
const PILL_MIN_WIDTH: u32 = 36;
const PILL_CHAR_WIDTH: u32 = 7;
const PILL_PADDING: u32 = 16;
const PILL_GAP: u32 = 6;
const TAG_ROW_BUDGET: u32 = 470;

const TITLE_FONT: &str = "'Sora', 'Segoe UI', sans-serif";
const HEADER_FONT: &str = "'Playfair Display', 'Georgia', serif";

/// Display options for one card render.
#[derive(Debug, Clone)]
pub struct CardOptions {
    pub username: String,
    pub theme: Theme,
    pub show_date: bool,
    pub show_tags: bool,
    /// Overrides the pluralization-aware default header.
    pub header_label: Option<String>,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            username: String::new(),
            theme: Theme::Dark,
            show_date: true,
            show_tags: true,
            header_label: None,
        }
    }
}

/// Per-post layout, computed fresh on every render.
struct ItemLayout<'a> {
    post: &'a Post,
    title_lines: Vec<String>,
    title_height: u32,
    show_date: bool,
    show_tags: bool,
    content_height: u32,
}

fn layout_item<'a>(post: &'a Post, options: &CardOptions) -> ItemLayout<'a> {
    let title_lines = wrap_text(post.display_title(), MAX_TITLE_CHARS);
    let title_height = title_lines.len() as u32 * TITLE_LINE_HEIGHT;
    let show_date = options.show_date && !post.published_display.is_empty();
    let show_tags = options.show_tags && !post.tags.is_empty();

    let date_height = if show_date { DATE_ROW_HEIGHT } else { 0 };
    let tags_height = if show_tags { TAG_ROW_HEIGHT } else { 0 };

    ItemLayout {
        post,
        title_height,
        title_lines,
        show_date,
        show_tags,
        content_height: title_height + date_height + tags_height + CONTENT_PADDING,
    }
}

/// Render the themed SVG card for an already-limited list of posts.
///
/// An empty list still produces a valid header-plus-footer card.
pub fn render_card(items: &[Post], options: &CardOptions) -> String {
    let tokens = options.theme.tokens();

    let header_text = options.header_label.clone().unwrap_or_else(|| {
        if items.len() > 1 {
            "Latest Medium Posts".to_string()
        } else {
            "Latest Medium Post".to_string()
        }
    });

    let layouts: Vec<ItemLayout> = items
        .iter()
        .map(|post| layout_item(post, options))
        .collect();

    let total_height = HEADER_HEIGHT
        + layouts
            .iter()
            .map(|l| l.content_height + ITEM_GAP)
            .sum::<u32>()
        + BOTTOM_MARGIN;

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg width=\"{CARD_WIDTH}\" height=\"{total_height}\" \
         xmlns=\"http://www.w3.org/2000/svg\" \
         xmlns:xlink=\"http://www.w3.org/1999/xlink\">\n"
    ));
    svg.push_str(&render_defs(tokens));
    svg.push_str(&render_frame(tokens, total_height));
    svg.push_str(&render_header(&header_text, tokens));

    let mut cursor_y = HEADER_HEIGHT;
    for layout in &layouts {
        svg.push_str(&render_item(layout, tokens, cursor_y));
        cursor_y += layout.content_height + ITEM_GAP;
    }

    svg.push_str(&render_footer(&options.username, tokens, total_height));
    svg.push_str("</svg>");
    svg
}

fn render_defs(tokens: &ThemeTokens) -> String {
    format!(
        "<defs>\n\
         <linearGradient id=\"accent\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"0%\">\n\
         <stop offset=\"0%\" style=\"stop-color:{accent};stop-opacity:1\"/>\n\
         <stop offset=\"100%\" style=\"stop-color:{accent_soft};stop-opacity:1\"/>\n\
         </linearGradient>\n\
         <pattern id=\"grain\" x=\"0\" y=\"0\" width=\"4\" height=\"4\" patternUnits=\"userSpaceOnUse\">\n\
         <rect width=\"4\" height=\"4\" fill=\"{base}\"/>\n\
         <circle cx=\"1\" cy=\"1\" r=\"0.4\" fill=\"{grain}\"/>\n\
         <circle cx=\"3\" cy=\"2\" r=\"0.35\" fill=\"{grain}\"/>\n\
         </pattern>\n\
         </defs>\n",
        accent = tokens.accent,
        accent_soft = tokens.accent_soft,
        base = tokens.base,
        grain = tokens.grain,
    )
}

fn render_frame(tokens: &ThemeTokens, total_height: u32) -> String {
    format!(
        "<rect width=\"{CARD_WIDTH}\" height=\"{total_height}\" rx=\"16\" fill=\"url(#grain)\"/>\n\
         <rect x=\"18\" y=\"16\" width=\"514\" height=\"{frame_height}\" rx=\"18\" \
         fill=\"{card}\" stroke=\"{border}\" stroke-width=\"1.5\"/>\n\
         <rect x=\"34\" y=\"34\" width=\"8\" height=\"{rail_height}\" rx=\"6\" \
         fill=\"{rail}\" opacity=\"0.6\"/>\n",
        frame_height = total_height.saturating_sub(32),
        rail_height = total_height.saturating_sub(68),
        card = tokens.card,
        border = tokens.border,
        rail = tokens.rail,
    )
}

fn render_header(header_text: &str, tokens: &ThemeTokens) -> String {
    format!(
        "<g transform=\"translate(70, 50)\">\n\
         <text x=\"0\" y=\"0\" font-family=\"{HEADER_FONT}\" font-size=\"24\" \
         font-weight=\"600\" fill=\"{text}\">{header}</text>\n\
         <text x=\"0\" y=\"22\" font-family=\"{TITLE_FONT}\" font-size=\"12\" \
         fill=\"{muted}\">Curated from your Medium RSS feed</text>\n\
         </g>\n",
        text = tokens.text,
        muted = tokens.muted,
        header = escape_markup(header_text),
    )
}

fn render_item(layout: &ItemLayout, tokens: &ThemeTokens, y: u32) -> String {
    let mut tspans = String::new();
    for (i, line) in layout.title_lines.iter().enumerate() {
        let dy = if i == 0 { 0 } else { TITLE_LINE_HEIGHT };
        tspans.push_str(&format!(
            "<tspan x=\"0\" dy=\"{dy}\">{}</tspan>",
            escape_markup(line)
        ));
    }

    let date_y = layout.title_height + 10;
    let tags_y = date_y + if layout.show_date { DATE_ROW_HEIGHT } else { 0 } + 6;

    let date_line = if layout.show_date {
        render_date_line(&layout.post.published_display, tokens, date_y)
    } else {
        String::new()
    };
    let tags_line = if layout.show_tags {
        render_tag_pills(&layout.post.tags, tokens, tags_y)
    } else {
        String::new()
    };

    let panel_height = layout.content_height + 4;

    format!(
        "<g transform=\"translate(70, {y})\">\n\
         <rect x=\"-12\" y=\"-18\" width=\"510\" height=\"{panel_height}\" rx=\"12\" \
         fill=\"{card_accent}\" opacity=\"0.45\"/>\n\
         <a xlink:href=\"{link}\" target=\"_blank\">\n\
         <text x=\"0\" y=\"0\" font-family=\"{TITLE_FONT}\" font-size=\"14.5\" \
         font-weight=\"600\" fill=\"{link_color}\">{tspans}</text>\n\
         </a>\n\
         {date_line}{tags_line}</g>\n",
        card_accent = tokens.card_accent,
        link = escape_markup(layout.post.display_link()),
        link_color = tokens.link,
    )
}

fn render_date_line(date: &str, tokens: &ThemeTokens, y: u32) -> String {
    format!(
        "<text x=\"0\" y=\"{y}\" font-family=\"{TITLE_FONT}\" font-size=\"11\" \
         fill=\"{muted}\">{date}</text>\n",
        muted = tokens.muted,
        date = escape_markup(date),
    )
}

/// Tag pills, left to right. A pill that would cross the row budget is
/// dropped rather than wrapped to a second row.
fn render_tag_pills(tags: &[String], tokens: &ThemeTokens, y: u32) -> String {
    let mut pills = String::new();
    let mut x: u32 = 0;

    for tag in tags.iter().take(3) {
        let text = truncate(tag, MAX_TAG_CHARS);
        let width = (text.chars().count() as u32 * PILL_CHAR_WIDTH + PILL_PADDING)
            .max(PILL_MIN_WIDTH);
        if x + width > TAG_ROW_BUDGET {
            continue;
        }

        pills.push_str(&format!(
            "<g transform=\"translate({x}, {y})\">\n\
             <rect width=\"{width}\" height=\"16\" rx=\"8\" fill=\"{border}\"/>\n\
             <text x=\"{center}\" y=\"12\" font-family=\"{TITLE_FONT}\" font-size=\"9\" \
             fill=\"{muted}\" text-anchor=\"middle\">{text}</text>\n\
             </g>\n",
            border = tokens.border,
            muted = tokens.muted,
            center = width as f32 / 2.0,
            text = escape_markup(&text),
        ));

        x += width + PILL_GAP;
    }

    pills
}

fn render_footer(username: &str, tokens: &ThemeTokens, total_height: u32) -> String {
    let byline = if username.is_empty() {
        String::new()
    } else {
        format!(
            "<text x=\"520\" y=\"-6\" font-family=\"{TITLE_FONT}\" font-size=\"10\" \
             fill=\"{accent}\" text-anchor=\"end\" opacity=\"0.7\">by {username}</text>\n",
            accent = tokens.accent,
            username = escape_markup(username),
        )
    };

    format!(
        "<g transform=\"translate(0, {footer_y})\">\n\
         <text x=\"70\" y=\"0\" font-family=\"{TITLE_FONT}\" font-size=\"10\" \
         fill=\"{muted}\" opacity=\"0.7\">Medium Blog Stats Card</text>\n\
         {byline}</g>\n",
        footer_y = total_height.saturating_sub(12),
        muted = tokens.muted,
    )
}
