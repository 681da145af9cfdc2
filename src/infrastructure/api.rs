// src/infrastructure/api.rs
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::application::NoteRepository;
use crate::domain::{DomainError, Note, Resource};

/// HTTP client for the notes API.
///
/// `base_url` is resolved once at startup (see `ApiConfig::resolve_base_url`) and used
/// verbatim. Requests carry no timeout and are never retried.
#[derive(Debug, Clone)]
pub struct NoteClient {
    base_url: String,
    client: Client,
}

impl NoteClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        resource: Resource,
    ) -> Result<T, DomainError> {
        debug!(%url, "Sending request");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::Transport {
                resource,
                message: e.to_string(),
            })?;

        ensure_success(response, resource)?
            .json::<T>()
            .await
            .map_err(|e| {
                let message = e.to_string();
                if e.is_decode() {
                    DomainError::Parse { resource, message }
                } else {
                    DomainError::Transport { resource, message }
                }
            })
    }
}

fn ensure_success(response: Response, resource: Resource) -> Result<Response, DomainError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    Err(DomainError::Fetch {
        resource,
        status: status.as_u16(),
        status_text: status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_str().to_string()),
    })
}

impl NoteRepository for NoteClient {
    #[instrument(level = "debug", skip(self))]
    async fn get_all_notes(&self) -> Result<Vec<Note>, DomainError> {
        let notes: Vec<Note> = self
            .get_json(format!("{}/notes", self.base_url), Resource::Notes)
            .await?;
        debug!(count = notes.len(), "Fetched notes");
        Ok(notes)
    }

    #[instrument(level = "debug", skip(self))]
    async fn get_note_by_id(&self, id: &str) -> Result<Note, DomainError> {
        // id is embedded as-is; callers pass opaque identifiers
        self.get_json(format!("{}/note/{}", self.base_url, id), Resource::Note)
            .await
    }
}
