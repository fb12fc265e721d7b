//! Pure string utilities shared by the normalizer and the renderer.
//!
//! Everything here is total: no input can make these functions fail.
//! Lengths are counted in characters, not bytes, so multi-byte titles
//! wrap and truncate without splitting a code point.

/// Collapse whitespace runs to a single space and trim both ends.
pub fn clean_text(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Greedy word wrap to `max_chars` characters per line.
///
/// Words longer than `max_chars` are hard-split into `max_chars`-sized
/// chunks so no character is ever dropped. Always returns at least one
/// line; an empty or whitespace-only input yields a single empty line.
pub fn wrap_text(s: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);

    let mut words: Vec<String> = Vec::new();
    for word in s.split_whitespace() {
        if word.chars().count() <= max_chars {
            words.push(word.to_string());
        } else {
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(max_chars) {
                words.push(chunk.iter().collect());
            }
        }
    }

    if words.is_empty() {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in words {
        if current.is_empty() {
            current = word;
        } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Truncate to `max_len` characters, ending in `...` when cut.
///
/// Strings at or under the limit come back unchanged; anything longer
/// is cut to exactly `max_len` characters including the ellipsis.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Escape the five markup-reserved characters for embedding in SVG/XML.
///
/// Ampersand is replaced first so entities introduced by the later
/// substitutions are not escaped twice.
pub fn escape_markup(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_collapses_whitespace() {
        assert_eq!(clean_text("  Hello \n\t world  "), "Hello world");
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("   \n "), "");
    }

    #[test]
    fn wrap_respects_budget() {
        let lines = wrap_text("the quick brown fox jumps over the lazy dog", 10);
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, "the quick brown fox jumps over the lazy dog");
    }

    #[test]
    fn wrap_hard_splits_long_words() {
        let lines = wrap_text("supercalifragilistic", 5);
        assert_eq!(lines, vec!["super", "calif", "ragil", "istic"]);
    }

    #[test]
    fn wrap_empty_input_yields_one_empty_line() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
        assert_eq!(wrap_text("   ", 10), vec![String::new()]);
    }

    #[test]
    fn wrap_single_word_per_line_when_tight() {
        let lines = wrap_text("aa bb cc", 2);
        assert_eq!(lines, vec!["aa", "bb", "cc"]);
    }

    #[test]
    fn wrap_is_lossless_over_words() {
        let input = "Rust ownership, borrowing and lifetimes explained once more";
        let lines = wrap_text(input, 16);
        assert_eq!(lines.join(" "), clean_text(input));
    }

    #[test]
    fn truncate_long_string() {
        let long = "This is a very long string that exceeds the maximum length";
        let result = truncate(long, 20);

        assert_eq!(result.chars().count(), 20);
        assert!(result.ends_with("..."));
        assert_eq!(result, "This is a very lo...");
    }

    #[test]
    fn truncate_short_string() {
        let result = truncate("Short", 20);

        assert_eq!(result, "Short");
        assert!(!result.contains("..."));
    }

    #[test]
    fn truncate_exact_length() {
        let exact = "12345678901234567890";
        let result = truncate(exact, 20);

        assert_eq!(result, exact);
        assert!(!result.contains("..."));
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        let result = truncate("日本語のとても長いタイトルです", 8);
        assert_eq!(result.chars().count(), 8);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn escape_handles_all_five_characters() {
        assert_eq!(
            escape_markup(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&apos;s&lt;/a&gt;"
        );
    }

    #[test]
    fn escape_ampersand_first_avoids_double_escaping() {
        // A literal "&lt;" in the input escapes its ampersand once.
        assert_eq!(escape_markup("&lt;"), "&amp;lt;");
    }

    #[test]
    fn escape_never_shortens() {
        for input in ["", "plain", "< > & \" '", "&&&&"] {
            assert!(escape_markup(input).len() >= input.len());
        }
    }
}
