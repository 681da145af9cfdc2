// src/ports/html.rs
use crate::constants::TABLE_WRAPPER_CLASS;
use crate::domain::Note;
use crate::infrastructure::markdown::render_note_content;
use crate::util::text::extract_first_line;
use html_escape::{encode_double_quoted_attribute, encode_text};
use tracing::instrument;

#[derive(Debug, Default)]
pub struct HtmlPresenter {
    strip_frontmatter: bool,
}

impl HtmlPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Presenter that drops a leading YAML block before rendering note bodies
    pub fn with_frontmatter_stripped() -> Self {
        Self {
            strip_frontmatter: true,
        }
    }

    fn render_content(&self, note: &Note) -> String {
        render_note_content(note, self.strip_frontmatter)
    }

    /// One-line summary: description if present, else the first line of the rendered body
    pub fn summary(&self, note: &Note) -> String {
        match note.metadata.description.as_deref() {
            Some(description) => description.to_string(),
            None => extract_first_line(&self.render_content(note)),
        }
    }

    fn render_tags(&self, note: &Note) -> String {
        if note.tags().is_empty() {
            return String::new();
        }
        let tags: String = note
            .tags()
            .iter()
            .map(|tag| format!(r#"<span class="tag">{}</span>"#, encode_text(tag)))
            .collect();
        format!(r#"<div class="tags">{tags}</div>"#)
    }

    /// Complete page for a single note, with its markdown body rendered
    #[instrument(level = "debug", skip(self, note), fields(note_id = %note.id))]
    pub fn render(&self, note: &Note) -> String {
        let title = encode_text(note.display_title());
        let description = note
            .metadata
            .description
            .as_deref()
            .map(|d| format!(r#"<p class="description">{}</p>"#, encode_text(d)))
            .unwrap_or_default();
        let updated = note
            .metadata
            .updated
            .as_deref()
            .map(|u| format!(r#"<div class="updated">Updated: {}</div>"#, encode_text(u)))
            .unwrap_or_default();

        let body = format!(
            r#"<article class="note">
        <header>
            <h1>{title}</h1>
            {description}
        </header>
        <div class="prose">{content}</div>
        <footer class="note-info">
            <div>Note ID: {note_id}</div>
            {updated}
            {tags}
        </footer>
    </article>"#,
            title = title,
            description = description,
            content = self.render_content(note),
            note_id = encode_text(&note.id),
            updated = updated,
            tags = self.render_tags(note),
        );

        self.page(&title, &body)
    }

    /// Index page listing notes with their titles, descriptions and tags
    pub fn render_index(&self, heading: &str, notes: &[Note]) -> String {
        let items: String = if notes.is_empty() {
            r#"<p class="empty">No notes found.</p>"#.to_string()
        } else {
            let entries: String = notes
                .iter()
                .map(|note| {
                    format!(
                        r#"<li id="{id}"><h2>{title}</h2><p class="description">{summary}</p>{tags}</li>"#,
                        id = encode_double_quoted_attribute(&note.id),
                        title = encode_text(note.display_title()),
                        summary = encode_text(&self.summary(note)),
                        tags = self.render_tags(note),
                    )
                })
                .collect();
            format!(r#"<ul class="note-list">{entries}</ul>"#)
        };

        let heading = encode_text(heading);
        let body = format!("<h1>{heading}</h1>\n    {items}");
        self.page(&heading, &body)
    }

    fn page(&self, title: &str, body: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            max-width: 800px;
            margin: 2rem auto;
            padding: 0 1rem;
            background-color: #f5f5f5;
        }}
        .note, .note-list li {{
            background: white;
            border-radius: 8px;
            padding: 2rem;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
        .note-list {{
            list-style: none;
            padding: 0;
        }}
        .note-list li {{
            margin-bottom: 1rem;
        }}
        .description {{
            color: #666;
        }}
        pre {{
            background-color: #f8f9fa;
            padding: 1rem;
            border-radius: 4px;
            overflow-x: auto;
        }}
        code {{
            background-color: #f0f0f0;
            padding: 2px 4px;
            border-radius: 3px;
            font-family: monospace;
        }}
        .{wrapper} {{
            overflow-x: auto;
            margin: 1.5rem 0;
        }}
        table {{
            width: 100%;
            border-collapse: collapse;
        }}
        th, td {{
            padding: 0.75rem 1rem;
            border-bottom: 1px solid #eee;
            text-align: left;
        }}
        .note-info {{
            margin-top: 1rem;
            padding-top: 1rem;
            border-top: 1px solid #eee;
            font-size: 0.9em;
            color: #666;
        }}
        .tag {{
            display: inline-block;
            background: #e9ecef;
            padding: 2px 8px;
            border-radius: 4px;
            margin-right: 4px;
            font-size: 0.8em;
        }}
    </style>
</head>
<body>
    {body}
</body>
</html>"#,
            title = title,
            wrapper = TABLE_WRAPPER_CLASS,
            body = body,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Metadata;
    use rstest::rstest;

    fn note() -> Note {
        Note {
            id: "getting-started".to_string(),
            content: "# Intro\n\n| a | b |\n|---|---|\n| 1 | 2 |\n".to_string(),
            metadata: Metadata {
                title: Some("Getting <Started>".to_string()),
                description: Some("First steps".to_string()),
                tags: Some(vec!["rust".to_string(), "guide".to_string()]),
                updated: Some("2024-03-01T10:00:00Z".to_string()),
                ..Default::default()
            },
        }
    }

    #[test]
    fn given_note_when_rendering_then_produces_page_with_wrapped_table() {
        let presenter = HtmlPresenter::new();

        let html = presenter.render(&note());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h1>Intro</h1>"));
        assert!(html.contains("<div class=\"table-wrapper\">"));
        assert!(html.contains("Updated: 2024-03-01T10:00:00Z"));
        assert!(html.contains(r#"<span class="tag">rust</span>"#));
    }

    #[test]
    fn given_title_with_markup_when_rendering_then_title_is_escaped() {
        let presenter = HtmlPresenter::new();

        let html = presenter.render(&note());

        assert!(html.contains("Getting &lt;Started&gt;"));
        assert!(!html.contains("<Started>"));
    }

    #[test]
    fn given_no_notes_when_rendering_index_then_shows_empty_message() {
        let presenter = HtmlPresenter::new();

        let html = presenter.render_index("All notes", &[]);

        assert!(html.contains("No notes found."));
    }

    #[test]
    fn given_notes_when_rendering_index_then_lists_each_note() {
        let presenter = HtmlPresenter::new();
        let mut untitled = note();
        untitled.id = "plain".to_string();
        untitled.metadata = Metadata::default();
        untitled.content = "Just **text**\n\nmore".to_string();

        let html = presenter.render_index("All notes", &[note(), untitled]);

        assert_eq!(html.matches("<li id=").count(), 2);
        assert!(html.contains("<h2>plain</h2>"));
        assert!(html.contains("Just text"));
    }

    #[rstest]
    #[case(Some("Described"), "# Heading\n\nBody", "Described")]
    #[case(None, "# Heading\n\nBody", "Heading")]
    #[case(None, "", "")]
    fn given_note_when_summarizing_then_prefers_description(
        #[case] description: Option<&str>,
        #[case] content: &str,
        #[case] expected: &str,
    ) {
        let note = Note {
            id: "1".to_string(),
            content: content.to_string(),
            metadata: Metadata {
                description: description.map(str::to_string),
                ..Default::default()
            },
        };

        assert_eq!(HtmlPresenter::new().summary(&note), expected);
    }

    fn note_with_leading_rule() -> Note {
        Note {
            id: "draft".to_string(),
            content: "---\nStatus: draft\n---\nBody text".to_string(),
            metadata: Metadata::default(),
        }
    }

    #[test]
    fn given_leading_rule_and_heading_when_rendering_by_default_then_page_keeps_them() {
        let presenter = HtmlPresenter::new();

        let html = presenter.render(&note_with_leading_rule());

        assert!(html.contains("<hr />"));
        assert!(html.contains("<h2>Status: draft</h2>"));
        assert!(html.contains("<p>Body text</p>"));
    }

    #[test]
    fn given_leading_rule_and_heading_when_summarizing_then_matches_page_first_line() {
        let presenter = HtmlPresenter::new();
        let note = note_with_leading_rule();

        let summary = presenter.summary(&note);

        assert_eq!(summary, "Status: draft");
        assert!(presenter.render(&note).contains(&format!("<h2>{summary}</h2>")));
    }

    #[test]
    fn given_stripping_enabled_when_rendering_then_page_and_summary_skip_frontmatter() {
        let presenter = HtmlPresenter::with_frontmatter_stripped();
        let note = note_with_leading_rule();

        let html = presenter.render(&note);

        assert!(!html.contains("<hr />"));
        assert!(!html.contains("Status: draft"));
        assert!(html.contains("<p>Body text</p>"));
        assert_eq!(presenter.summary(&note), "Body text");
    }
}
