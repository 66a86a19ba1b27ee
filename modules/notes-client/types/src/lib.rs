//! Shared types for the notes client and the stores it talks to.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

// =====================================================
// Identifiers
// =====================================================

/// Note identifier.
///
/// Keeps the JSON shape the store used: json-server and friends hand out
/// numbers, other stores strings. Equality and hashing go by the textual
/// form, so `7` and `"7"` name the same note.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NoteId {
    Number(u64),
    Text(String),
}

impl NoteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self::Text(id.into())
    }

    /// Parse user input: all-digit input becomes a numeric id.
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<u64>() {
            Ok(n) => Self::Number(n),
            Err(_) => Self::Text(raw.to_string()),
        }
    }

    fn key(&self) -> Cow<'_, str> {
        match self {
            Self::Number(n) => Cow::Owned(n.to_string()),
            Self::Text(s) => Cow::Borrowed(s.as_str()),
        }
    }
}

impl PartialEq for NoteId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            _ => self.key() == other.key(),
        }
    }
}

impl Eq for NoteId {}

impl Hash for NoteId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for NoteId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<u64> for NoteId {
    fn from(id: u64) -> Self {
        Self::Number(id)
    }
}

// =====================================================
// Domain Types
// =====================================================

/// A single note as stored remotely and held by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub content: String,
    /// ISO-8601 creation timestamp, e.g. `2026-10-17T09:30:00.000Z`
    pub date: String,
    #[serde(default)]
    pub important: bool,
}

impl Note {
    /// Copy of this note with the importance flag flipped.
    pub fn with_importance_toggled(&self) -> Self {
        Self {
            important: !self.important,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_id_is_accepted() {
        let note: Note = serde_json::from_str(
            r#"{"id": 42, "content": "call mom", "date": "2026-10-17T09:30:00.000Z", "important": true}"#,
        )
        .unwrap();
        assert_eq!(note.id, NoteId::from(42));
        assert_eq!(note.id.to_string(), "42");
    }

    #[test]
    fn test_numeric_id_stays_numeric_after_toggle() {
        let note: Note = serde_json::from_str(
            r#"{"id": 42, "content": "call mom", "date": "2026-10-17T09:30:00.000Z", "important": false}"#,
        )
        .unwrap();
        let json = serde_json::to_value(note.with_importance_toggled()).unwrap();
        assert_eq!(json["id"], serde_json::json!(42));
        assert_eq!(json["important"], true);
    }

    #[test]
    fn test_text_id_stays_text() {
        let note: Note =
            serde_json::from_str(r#"{"id": "a1b2", "content": "x", "date": "d"}"#).unwrap();
        assert_eq!(note.id, NoteId::new("a1b2"));
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["id"], "a1b2");
    }

    #[test]
    fn test_numeric_and_text_forms_compare_equal() {
        use std::collections::HashSet;

        assert_eq!(NoteId::from(7), NoteId::from("7"));
        assert_ne!(NoteId::from(7), NoteId::from("07"));
        assert_eq!(NoteId::parse("7"), NoteId::Number(7));
        assert_eq!(NoteId::parse("abc"), NoteId::Text("abc".to_string()));

        let ids: HashSet<NoteId> = [NoteId::from(7), NoteId::from("7")].into_iter().collect();
        assert_eq!(ids.len(), 1);
    }

    #[test]
    fn test_missing_important_defaults_to_false() {
        let note: Note =
            serde_json::from_str(r#"{"id": "a1", "content": "x", "date": "d"}"#).unwrap();
        assert!(!note.important);
    }

    #[test]
    fn test_toggle_keeps_other_fields() {
        let note = Note {
            id: NoteId::new("n1"),
            content: "hello".to_string(),
            date: "2026-10-17T09:30:00.000Z".to_string(),
            important: false,
        };
        let toggled = note.with_importance_toggled();
        assert!(toggled.important);
        assert_eq!(toggled.id, note.id);
        assert_eq!(toggled.content, note.content);
        assert_eq!(toggled.date, note.date);
    }
}
