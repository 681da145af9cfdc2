// src/domain/error.rs
use std::fmt;
use thiserror::Error;

/// Which API resource a request was addressing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Notes,
    Note,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Notes => f.write_str("notes"),
            Resource::Note => f.write_str("note"),
        }
    }
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Failed to fetch {resource}: {status_text}")]
    Fetch {
        resource: Resource,
        status: u16,
        status_text: String,
    },
    #[error("Failed to parse {resource} response: {message}")]
    Parse { resource: Resource, message: String },
    #[error("Request for {resource} failed: {message}")]
    Transport { resource: Resource, message: String },
    #[error("Note not found: {0}")]
    NoteNotFound(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}
