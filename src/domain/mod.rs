// src/domain/mod.rs
pub mod error;
pub mod note;

pub use error::{DomainError, Resource};
pub use note::{Metadata, Note};
