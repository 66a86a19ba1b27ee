//! Line commands understood by the terminal front end.

use notes_types::NoteId;
use thiserror::Error;

pub const HELP: &str = "\
commands:
  list | ls          show notes
  add <text>         create a note
  type <text>        edit the pending note text
  save               create a note from the pending text
  toggle <id>        flip a note's importance
  filter             switch between all and important notes
  dismiss            hide the current notice
  help               this text
  quit | exit        leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add(String),
    Type(String),
    Save,
    Toggle(NoteId),
    Filter,
    Dismiss,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("unknown command `{0}`\n{}", HELP)]
    Unknown(String),
}

pub fn parse(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "" => Err(ParseError::Empty),
        "list" | "ls" => Ok(Command::List),
        "add" => Ok(Command::Add(rest.to_string())),
        "type" => Ok(Command::Type(rest.to_string())),
        "save" => Ok(Command::Save),
        "toggle" if rest.is_empty() => Err(ParseError::MissingArgument("toggle")),
        "toggle" => Ok(Command::Toggle(NoteId::parse(rest))),
        "filter" => Ok(Command::Filter),
        "dismiss" => Ok(Command::Dismiss),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        _ => Err(ParseError::Unknown(word.to_string())),
    }
}
