// src/domain/note.rs
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub content: String,
    #[serde(default, deserialize_with = "metadata_or_default")]
    pub metadata: Metadata,
}

/// Frontmatter attached to a note.
///
/// Only `title`, `description`, `tags` and `updated` are interpreted. Every other key is
/// kept in `extra` and serialized back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_tags")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string")]
    pub updated: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Note {
    pub fn tags(&self) -> &[String] {
        self.metadata.tags.as_deref().unwrap_or_default()
    }

    /// Exact, case-sensitive tag membership
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags().iter().any(|t| t == tag)
    }

    /// Checks title, description, content and tags in that order, stopping at the first hit.
    ///
    /// `lowered_query` must already be lower-cased; an empty query matches every note.
    pub fn matches_query(&self, lowered_query: &str) -> bool {
        let contains = |field: &str| field.to_lowercase().contains(lowered_query);

        self.metadata.title.as_deref().is_some_and(contains)
            || self.metadata.description.as_deref().is_some_and(contains)
            || contains(self.content.as_str())
            || self.tags().iter().any(|tag| contains(tag.as_str()))
    }

    pub fn display_title(&self) -> &str {
        self.metadata.title.as_deref().unwrap_or(&self.id)
    }
}

fn metadata_or_default<'de, D>(deserializer: D) -> Result<Metadata, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Metadata>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_tags<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(tag) => Some(tag),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}
