// src/application/mod.rs
pub mod note_query;
pub mod recovery;

pub use note_query::{NoteQueryService, NoteRepository};
pub use recovery::Recovered;
