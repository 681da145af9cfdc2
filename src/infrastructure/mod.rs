// src/infrastructure/mod.rs
pub mod api;
pub mod config;
pub mod markdown;
pub mod renderer;

pub use api::NoteClient;
pub use config::{ApiConfig, Config, ExecutionMode};
pub use renderer::PageRenderer;
