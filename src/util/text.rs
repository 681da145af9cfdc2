// src/util/text.rs
use html_escape::decode_html_entities;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BLOCK_TAG_REGEX: Regex =
        Regex::new(r"</?(p|div|br|li|h[1-6]|tr|pre)[^>]*>").expect("Failed to compile block tag regex");
    static ref ANY_TAG_REGEX: Regex = Regex::new(r"<[^>]+>").expect("Failed to compile tag regex");
}

/// Extract the first non-empty line of plain text from rendered HTML.
///
/// Block-level tags act as line breaks, remaining tags are stripped, and entities are
/// decoded last so that escaped markup in the text stays text.
///
/// # Examples
///
/// ```
/// use noteview::util::text::extract_first_line;
///
/// let html = "<h1>Release notes</h1><p>Second line</p>";
/// assert_eq!(extract_first_line(html), "Release notes");
/// ```
pub fn extract_first_line(html: &str) -> String {
    let with_newlines = BLOCK_TAG_REGEX.replace_all(html, "\n");
    let no_tags = ANY_TAG_REGEX.replace_all(&with_newlines, "");

    no_tags
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| decode_html_entities(line).into_owned())
        .unwrap_or_default()
}

/// Shorten `text` to at most `max_chars` characters, marking the cut with an ellipsis
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}
