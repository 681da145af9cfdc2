// src/util/testing.rs

use anyhow::Result;
use std::cell::Cell;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NoteRepository;
use crate::domain::{DomainError, Note, Resource};

/// In-memory NoteRepository for exercising the query layer without HTTP
///
/// # Examples
///
/// ```
/// use noteview::util::testing::MockNoteRepository;
/// use noteview::domain::{Metadata, Note};
///
/// let mock = MockNoteRepository::builder()
///     .with_note(Note {
///         id: "hello".to_string(),
///         content: "# Hello".to_string(),
///         metadata: Metadata::default(),
///     })
///     .with_list_failure(500)
///     .build();
/// ```
pub struct MockNoteRepository {
    notes: Vec<Note>,
    list_failure: Option<u16>,
    get_failure: Option<u16>,
    list_calls: Cell<usize>,
}

impl MockNoteRepository {
    pub fn builder() -> MockNoteRepositoryBuilder {
        MockNoteRepositoryBuilder::new()
    }

    /// Number of times get_all_notes has been called
    pub fn list_calls(&self) -> usize {
        self.list_calls.get()
    }
}

fn fetch_error(resource: Resource, status: u16) -> DomainError {
    let status_text = match status {
        404 => "Not Found",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "Error",
    };
    DomainError::Fetch {
        resource,
        status,
        status_text: status_text.to_string(),
    }
}

impl NoteRepository for MockNoteRepository {
    async fn get_all_notes(&self) -> Result<Vec<Note>, DomainError> {
        self.list_calls.set(self.list_calls.get() + 1);
        match self.list_failure {
            Some(status) => Err(fetch_error(Resource::Notes, status)),
            None => Ok(self.notes.clone()),
        }
    }

    async fn get_note_by_id(&self, id: &str) -> Result<Note, DomainError> {
        if let Some(status) = self.get_failure {
            return Err(fetch_error(Resource::Note, status));
        }
        self.notes
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or_else(|| fetch_error(Resource::Note, 404))
    }
}

/// Builder for MockNoteRepository
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockNoteRepositoryBuilder {
    notes: Vec<Note>,
    list_failure: Option<u16>,
    get_failure: Option<u16>,
}

impl MockNoteRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            notes: vec![],
            list_failure: None,
            get_failure: None,
        }
    }

    /// Add a note returned by both listing and lookup, in insertion order
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    pub fn with_notes(mut self, notes: impl IntoIterator<Item = Note>) -> Self {
        self.notes.extend(notes);
        self
    }

    /// Make get_all_notes fail as if the API answered with `status`
    pub fn with_list_failure(mut self, status: u16) -> Self {
        self.list_failure = Some(status);
        self
    }

    /// Make get_note_by_id fail as if the API answered with `status`
    pub fn with_get_failure(mut self, status: u16) -> Self {
        self.get_failure = Some(status);
        self
    }

    pub fn build(self) -> MockNoteRepository {
        MockNoteRepository {
            notes: self.notes,
            list_failure: self.list_failure,
            get_failure: self.get_failure,
            list_calls: Cell::new(0),
        }
    }
}

impl Default for MockNoteRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "reqwest", "mio", "h2"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
