//! Remote note store seam.
//!
//! The controller only ever sees this trait; `HttpNoteStore` is the real
//! implementation and tests plug in an in-memory one.

use async_trait::async_trait;
use notes_types::{Note, NoteId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Request never got a response (connect, timeout, TLS, ...)
    #[error("request failed: {0}")]
    Transport(String),
    /// Store answered with a non-success status
    #[error("HTTP {status}{}", body_suffix(.body))]
    Status { status: u16, body: String },
    /// Response body was not the expected JSON
    #[error("invalid response: {0}")]
    Decode(String),
}

fn body_suffix(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(": {}", body)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Fetch every note, in store order.
    async fn list(&self) -> StoreResult<Vec<Note>>;

    /// Persist a candidate note. The returned note is canonical and may
    /// carry a different id than the candidate.
    async fn create(&self, candidate: &Note) -> StoreResult<Note>;

    /// Replace the note stored under `id`. Fails when the id is gone.
    async fn update(&self, id: &NoteId, note: &Note) -> StoreResult<Note>;
}
