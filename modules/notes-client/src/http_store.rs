//! Typed HTTP client for a REST notes collection.
//!
//! `GET {base}`, `POST {base}`, `PUT {base}/{id}`, all JSON.

use crate::store::{NoteStore, StoreError, StoreResult};
use async_trait::async_trait;
use notes_types::{Note, NoteId};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub struct HttpNoteStore {
    base_url: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpNoteStore {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
            timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/{id}` with the id escaped as a single path segment.
    fn note_url(&self, id: &NoteId) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(&id.to_string()))
    }

    async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> StoreResult<T> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }

        resp.json::<T>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }
}

#[async_trait]
impl NoteStore for HttpNoteStore {
    async fn list(&self) -> StoreResult<Vec<Note>> {
        let resp = self
            .client
            .get(&self.base_url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let notes: Vec<Note> = Self::read_json(resp).await?;
        log::debug!("[NOTES] GET {} -> {} notes", self.base_url, notes.len());
        Ok(notes)
    }

    async fn create(&self, candidate: &Note) -> StoreResult<Note> {
        let resp = self
            .client
            .post(&self.base_url)
            .json(candidate)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let note: Note = Self::read_json(resp).await?;
        log::debug!("[NOTES] POST {} -> id {}", self.base_url, note.id);
        Ok(note)
    }

    async fn update(&self, id: &NoteId, note: &Note) -> StoreResult<Note> {
        let url = self.note_url(id);
        let resp = self
            .client
            .put(&url)
            .json(note)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let updated: Note = Self::read_json(resp).await?;
        log::debug!("[NOTES] PUT {} -> important={}", url, updated.important);
        Ok(updated)
    }
}
