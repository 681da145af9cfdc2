// src/infrastructure/markdown.rs
use lazy_static::lazy_static;
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};
use regex::Regex;
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crate::constants::TABLE_WRAPPER_CLASS;
use crate::domain::Note;

lazy_static! {
    static ref FRONTMATTER_REGEX: Regex =
        Regex::new(r"(?s)^---\n(.*?)\n---\n(.*)$").expect("Failed to compile frontmatter regex");
    static ref TABLE_WRAPPER_OPEN: String = format!("<div class=\"{TABLE_WRAPPER_CLASS}\">\n");
}

const TABLE_WRAPPER_CLOSE: &str = "</div>\n";

pub fn markdown_to_html(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);

    let events = Parser::new_ext(text, options).flat_map(wrap_tables);

    let mut html_output = String::new();
    html::push_html(&mut html_output, events);
    html_output
}

/// Surround each table with a scroll container; table events pass through untouched.
fn wrap_tables(event: Event<'_>) -> Vec<Event<'_>> {
    if matches!(event, Event::Start(Tag::Table(_))) {
        vec![
            Event::Html(CowStr::Borrowed(TABLE_WRAPPER_OPEN.as_str())),
            event,
        ]
    } else if matches!(event, Event::End(TagEnd::Table)) {
        vec![event, Event::Html(CowStr::Borrowed(TABLE_WRAPPER_CLOSE))]
    } else {
        vec![event]
    }
}

/// Separate a leading YAML frontmatter block from the markdown body.
///
/// Returns `None` and the untouched content when there is no block or its YAML is not a
/// mapping. The returned body is trimmed.
pub fn split_frontmatter(content: &str) -> (Option<Map<String, Value>>, &str) {
    let Some(caps) = FRONTMATTER_REGEX.captures(content) else {
        return (None, content);
    };
    let (Some(yaml), Some(body)) = (caps.get(1), caps.get(2)) else {
        return (None, content);
    };

    match serde_yaml::from_str::<Map<String, Value>>(yaml.as_str()) {
        Ok(frontmatter) => (Some(frontmatter), body.as_str().trim()),
        Err(e) => {
            debug!(error = %e, "Ignoring unparsable frontmatter");
            (None, content)
        }
    }
}

/// Render a note body to HTML.
///
/// Content is rendered as published unless `strip_frontmatter` is set, in which case a
/// leading YAML block is dropped first. A body that merely starts with a thematic break
/// and a setext heading looks the same as frontmatter, so stripping is opt-in.
#[instrument(level = "debug", skip(note), fields(note_id = %note.id))]
pub fn render_note_content(note: &Note, strip_frontmatter: bool) -> String {
    if strip_frontmatter {
        let (_, body) = split_frontmatter(&note.content);
        markdown_to_html(body)
    } else {
        markdown_to_html(&note.content)
    }
}
