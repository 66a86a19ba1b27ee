//! Plain-text rendering of a view snapshot.

use crate::state::ViewSnapshot;
use notes_types::Note;
use std::borrow::Cow;
use std::fmt::Write;

/// Keep user text on one line: line breaks are shown as `\n` / `\r`.
fn one_line(text: &str) -> Cow<'_, str> {
    if !text.contains(['\n', '\r']) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace('\r', "\\r").replace('\n', "\\n"))
}

pub fn toggle_label(note: &Note) -> &'static str {
    if note.important {
        "make not important"
    } else {
        "make important"
    }
}

pub fn render(view: &ViewSnapshot) -> String {
    let mut out = String::from("Notes\n");

    if let Some(notice) = &view.notice {
        let _ = writeln!(out, "! {}", one_line(notice));
    }

    let _ = writeln!(out, "[{}]", view.filter.toggle_label());

    for note in &view.visible {
        let marker = if note.important { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "  {} {} {} [{}]",
            marker,
            note.id,
            one_line(&note.content),
            toggle_label(note)
        );
    }

    let _ = writeln!(out, "> {}", one_line(&view.new_note));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Filter;
    use notes_types::NoteId;

    fn note(id: u64, content: &str, important: bool) -> Note {
        Note {
            id: NoteId::from(id),
            content: content.to_string(),
            date: "2026-10-17T09:30:00.000Z".to_string(),
            important,
        }
    }

    #[test]
    fn test_render_full_view() {
        let view = ViewSnapshot {
            visible: vec![note(1, "buy milk", false), note(2, "call mom", true)],
            total: 2,
            filter: Filter::All,
            new_note: "draft".to_string(),
            notice: None,
        };
        assert_eq!(
            render(&view),
            "Notes\n\
             [show important]\n\
             \x20   1 buy milk [make important]\n\
             \x20 * 2 call mom [make not important]\n\
             > draft\n"
        );
    }

    #[test]
    fn test_render_notice_and_filter() {
        let view = ViewSnapshot {
            visible: vec![],
            total: 1,
            filter: Filter::ImportantOnly,
            new_note: String::new(),
            notice: Some("Initial notes could not be fetched".to_string()),
        };
        let text = render(&view);
        assert!(text.contains("! Initial notes could not be fetched\n"));
        assert!(text.contains("[show all]\n"));
        assert!(!text.contains("make important"));
    }

    #[test]
    fn test_multiline_content_stays_on_one_line() {
        let view = ViewSnapshot {
            visible: vec![note(3, "milk\neggs\r\nbread", false)],
            total: 1,
            filter: Filter::All,
            new_note: String::new(),
            notice: Some("The note \"a\nb\" was already deleted from the server".to_string()),
        };
        let text = render(&view);
        assert!(text.contains("  3 milk\\neggs\\r\\nbread [make important]\n"));
        assert!(text.contains("! The note \"a\\nb\" was already deleted from the server\n"));
        assert_eq!(text.lines().count(), 5);
    }
}
