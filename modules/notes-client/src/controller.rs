//! View-state controller.
//!
//! Every action is one round trip to the store. The state lock is never
//! held across an await: an action reads what it needs, talks to the
//! store, then applies its result to whatever the state is at completion.

use crate::config::{Config, ImportancePolicy};
use crate::notice;
use crate::state::{Filter, ViewSnapshot, ViewState};
use crate::store::{NoteStore, StoreError};
use chrono::{SecondsFormat, Utc};
use notes_types::{Note, NoteId};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Toggle requested for an id the client does not hold
    #[error("note not found: {0}")]
    NoteNotFound(NoteId),
}

#[derive(Clone)]
pub struct NotesController {
    store: Arc<dyn NoteStore>,
    state: Arc<Mutex<ViewState>>,
    notice_duration: Duration,
    importance: ImportancePolicy,
}

impl NotesController {
    pub fn new(store: Arc<dyn NoteStore>, config: &Config) -> Self {
        Self {
            store,
            state: Arc::new(Mutex::new(ViewState::default())),
            notice_duration: config.notice_duration,
            importance: config.importance,
        }
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        self.state.lock().snapshot()
    }

    /// Fetch every note and replace the local sequence with it.
    pub async fn load_initial(&self) -> Result<usize, ClientError> {
        match self.store.list().await {
            Ok(notes) => {
                let count = notes.len();
                self.state.lock().notes = notes;
                log::info!("[NOTES] Loaded {} notes", count);
                Ok(count)
            }
            Err(e) => {
                log::error!("[NOTES] Initial fetch failed: {}", e);
                self.notify("Initial notes could not be fetched".to_string());
                Err(e.into())
            }
        }
    }

    /// Submit the pending text as a new note.
    pub async fn add_note(&self) -> Result<Note, ClientError> {
        let content = self.state.lock().new_note.clone();
        self.add_note_with(content).await
    }

    /// Submit `content` as a new note. Callers that spawn the request
    /// capture the text first so later edits to the buffer cannot leak in.
    ///
    /// On success the buffer is cleared if it still holds `content`.
    pub async fn add_note_with(&self, content: String) -> Result<Note, ClientError> {
        let candidate = new_candidate(content, self.importance.pick());

        match self.store.create(&candidate).await {
            Ok(created) => {
                let mut state = self.state.lock();
                state.notes.push(created.clone());
                if state.new_note == candidate.content {
                    state.new_note.clear();
                }
                log::info!("[NOTES] Added note {}", created.id);
                Ok(created)
            }
            Err(e) => {
                log::error!("[NOTES] Create failed: {}", e);
                self.notify(format!(
                    "\"{}\" could not be added to the database",
                    candidate.content
                ));
                Err(e.into())
            }
        }
    }

    /// Flip the importance flag of a local note through the store.
    ///
    /// A store failure means the note is gone remotely, so it is dropped
    /// locally as well.
    pub async fn toggle_importance(&self, id: &NoteId) -> Result<Note, ClientError> {
        let original = match self.state.lock().find(id).cloned() {
            Some(note) => note,
            None => {
                log::warn!("[NOTES] Toggle ignored, no local note with id {}", id);
                return Err(ClientError::NoteNotFound(id.clone()));
            }
        };
        let changed = original.with_importance_toggled();

        match self.store.update(id, &changed).await {
            Ok(returned) => {
                if !self.state.lock().replace(id, returned.clone()) {
                    log::debug!("[NOTES] Note {} vanished locally before update completed", id);
                }
                Ok(returned)
            }
            Err(e) => {
                log::error!("[NOTES] Update of {} failed: {}", id, e);
                self.notify(format!(
                    "The note \"{}\" was already deleted from the server",
                    original.content
                ));
                self.state.lock().remove(id);
                Err(e.into())
            }
        }
    }

    pub fn toggle_filter(&self) -> Filter {
        let mut state = self.state.lock();
        state.filter = state.filter.toggled();
        state.filter
    }

    pub fn set_new_note(&self, text: impl Into<String>) {
        self.state.lock().new_note = text.into();
    }

    pub fn dismiss_notice(&self) {
        self.state.lock().dismiss_notice();
    }

    fn notify(&self, message: String) {
        notice::notify(&self.state, message, self.notice_duration);
    }
}

fn new_candidate(content: String, important: bool) -> Note {
    Note {
        id: NoteId::new(uuid::Uuid::new_v4().to_string()),
        content,
        date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        important,
    }
}
