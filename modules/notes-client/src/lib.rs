//! Notes client: in-memory view state synced with a REST notes collection.
//!
//! Holds the ordered notes, the pending input and the active filter, and
//! keeps them in step with the remote store through list/create/update.

pub mod command;
pub mod config;
pub mod controller;
pub mod http_store;
pub mod notice;
pub mod render;
pub mod state;
pub mod store;

pub use config::Config;
pub use controller::{ClientError, NotesController};
pub use http_store::HttpNoteStore;
pub use store::{NoteStore, StoreError};
