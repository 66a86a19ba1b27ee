//! View state owned by the controller, plus the pure derivations the
//! renderer reads.

use notes_types::{Note, NoteId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    ImportantOnly,
}

impl Filter {
    pub fn toggled(self) -> Self {
        match self {
            Self::All => Self::ImportantOnly,
            Self::ImportantOnly => Self::All,
        }
    }

    /// Label of the button that switches away from this filter.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::All => "show important",
            Self::ImportantOnly => "show all",
        }
    }

    pub fn admits(self, note: &Note) -> bool {
        match self {
            Self::All => true,
            Self::ImportantOnly => note.important,
        }
    }
}

#[derive(Debug, Default)]
pub struct ViewState {
    pub notes: Vec<Note>,
    pub new_note: String,
    pub filter: Filter,
    pub notice: Option<String>,
    /// Bumped on every notice change; a pending auto-clear only fires
    /// while its generation is still current.
    pub notice_generation: u64,
}

impl ViewState {
    pub fn notes_to_show(&self) -> Vec<Note> {
        self.notes
            .iter()
            .filter(|n| self.filter.admits(n))
            .cloned()
            .collect()
    }

    pub fn find(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| &n.id == id)
    }

    /// Replace the first note with a matching id. Returns false if none matched.
    pub fn replace(&mut self, id: &NoteId, note: Note) -> bool {
        match self.notes.iter_mut().find(|n| &n.id == id) {
            Some(slot) => {
                *slot = note;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &NoteId) {
        self.notes.retain(|n| &n.id != id);
    }

    /// Set the notice and return the generation it was armed with.
    pub fn set_notice(&mut self, message: String) -> u64 {
        self.notice_generation += 1;
        self.notice = Some(message);
        self.notice_generation
    }

    /// Clear the notice only if nothing newer has replaced it.
    pub fn expire_notice(&mut self, generation: u64) -> bool {
        if self.notice_generation != generation {
            return false;
        }
        self.notice = None;
        true
    }

    pub fn dismiss_notice(&mut self) {
        self.notice_generation += 1;
        self.notice = None;
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            visible: self.notes_to_show(),
            total: self.notes.len(),
            filter: self.filter,
            new_note: self.new_note.clone(),
            notice: self.notice.clone(),
        }
    }
}

/// Point-in-time copy of what the user should see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSnapshot {
    pub visible: Vec<Note>,
    pub total: usize,
    pub filter: Filter,
    pub new_note: String,
    pub notice: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: u64, content: &str, important: bool) -> Note {
        Note {
            id: NoteId::from(id),
            content: content.to_string(),
            date: "2026-10-17T09:30:00.000Z".to_string(),
            important,
        }
    }

    #[test]
    fn test_important_only_hides_unimportant() {
        let state = ViewState {
            notes: vec![note(1, "buy milk", false)],
            filter: Filter::ImportantOnly,
            ..Default::default()
        };
        assert!(state.notes_to_show().is_empty());
    }

    #[test]
    fn test_filter_preserves_order() {
        let mut state = ViewState {
            notes: vec![
                note(1, "a", true),
                note(2, "b", false),
                note(3, "c", true),
            ],
            ..Default::default()
        };
        assert_eq!(state.notes_to_show().len(), 3);

        state.filter = Filter::ImportantOnly;
        let shown: Vec<_> = state.notes_to_show().into_iter().map(|n| n.content).collect();
        assert_eq!(shown, vec!["a", "c"]);
    }

    #[test]
    fn test_double_toggle_restores_view() {
        let mut state = ViewState {
            notes: vec![note(1, "a", true), note(2, "b", false)],
            ..Default::default()
        };
        let before = state.snapshot();
        state.filter = state.filter.toggled();
        assert_ne!(state.snapshot().visible, before.visible);
        state.filter = state.filter.toggled();
        assert_eq!(state.snapshot(), before);
        assert_eq!(state.notes.len(), 2);
    }

    #[test]
    fn test_toggle_labels() {
        assert_eq!(Filter::All.toggle_label(), "show important");
        assert_eq!(Filter::ImportantOnly.toggle_label(), "show all");
    }

    #[test]
    fn test_replace_first_match_only() {
        let mut state = ViewState {
            notes: vec![note(1, "a", false), note(1, "dup", false)],
            ..Default::default()
        };
        assert!(state.replace(&NoteId::from(1), note(1, "a", true)));
        assert!(state.notes[0].important);
        assert!(!state.notes[1].important);
        assert!(!state.replace(&NoteId::from(9), note(9, "x", true)));
    }

    #[test]
    fn test_stale_generation_does_not_clear() {
        let mut state = ViewState::default();
        let first = state.set_notice("first".to_string());
        let second = state.set_notice("second".to_string());

        assert!(!state.expire_notice(first));
        assert_eq!(state.notice.as_deref(), Some("second"));

        assert!(state.expire_notice(second));
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_dismiss_invalidates_pending_clear() {
        let mut state = ViewState::default();
        let generation = state.set_notice("oops".to_string());
        state.dismiss_notice();
        assert!(state.notice.is_none());
        assert!(!state.expire_notice(generation));
    }
}
