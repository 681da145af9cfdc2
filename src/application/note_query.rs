// src/application/note_query.rs
use std::collections::HashSet;

use tracing::{debug, error, instrument};

use crate::application::Recovered;
use crate::domain::{DomainError, Note};

/// Read-only source of notes.
///
/// Implementations perform exactly one fetch per call and keep no state between calls.
#[allow(async_fn_in_trait)]
pub trait NoteRepository {
    async fn get_all_notes(&self) -> Result<Vec<Note>, DomainError>;

    async fn get_note_by_id(&self, id: &str) -> Result<Note, DomainError>;
}

/// Failure-tolerant query view over the full note collection.
///
/// Every query re-fetches the collection; nothing is cached. Fetch failures are
/// logged and replaced by an empty list (or `None` for single-note lookups).
pub struct NoteQueryService<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteQueryService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Fetch all notes, recovering to an empty list on failure
    pub async fn fetch_notes(&self) -> Recovered<Vec<Note>> {
        let recovered = Recovered::from_result(self.repository.get_all_notes().await, Vec::new);
        if let Some(err) = recovered.error() {
            error!(error = %err, "Failed to fetch notes");
        }
        recovered
    }

    /// Fetch one note, recovering to `None` on failure
    pub async fn fetch_note(&self, id: &str) -> Recovered<Option<Note>> {
        let recovered =
            Recovered::from_result(self.repository.get_note_by_id(id).await.map(Some), || None);
        if let Some(err) = recovered.error() {
            error!(note_id = id, error = %err, "Failed to fetch note");
        }
        recovered
    }

    pub async fn get_notes(&self) -> Vec<Note> {
        self.fetch_notes().await.into_value()
    }

    pub async fn get_note(&self, id: &str) -> Option<Note> {
        self.fetch_note(id).await.into_value()
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn get_notes_by_tag(&self, tag: &str) -> Vec<Note> {
        filter_by_tag(self.get_notes().await, tag)
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn get_all_tags(&self) -> Vec<String> {
        collect_tags(&self.get_notes().await)
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn search_notes(&self, query: &str) -> Vec<Note> {
        search(self.get_notes().await, query)
    }
}

pub fn filter_by_tag(notes: Vec<Note>, tag: &str) -> Vec<Note> {
    notes.into_iter().filter(|note| note.has_tag(tag)).collect()
}

/// Distinct tags in first-seen order: notes in list order, then each note's own tag order.
pub fn collect_tags(notes: &[Note]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();
    for tag in notes.iter().flat_map(Note::tags) {
        if seen.insert(tag.as_str()) {
            tags.push(tag.clone());
        }
    }
    debug!(count = tags.len(), "Collected distinct tags");
    tags
}

/// Case-insensitive substring search across title, description, content and tags
pub fn search(notes: Vec<Note>, query: &str) -> Vec<Note> {
    let lowered = query.to_lowercase();
    notes
        .into_iter()
        .filter(|note| note.matches_query(&lowered))
        .collect()
}
