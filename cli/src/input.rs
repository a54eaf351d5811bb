//! Line commands typed at the prompt.

use std::str::FromStr;

use todo_core::{Filter, TodoId, UnknownFilter};

pub const HELP: &str = "\
commands:
  add <title>          create a todo
  edit <id> <title>    rename a todo
  toggle <id>          flip completed
  rm <id>              delete a todo
  filter all|completed|active
  ls                   show the list
  help                 show this text
  quit                 exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add(String),
    Edit(TodoId, String),
    Toggle(TodoId),
    Remove(TodoId),
    Filter(Filter),
    List,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown command `{0}` (try `help`)")]
    UnknownCommand(String),

    #[error("`{0}` needs an id")]
    MissingId(&'static str),

    #[error(transparent)]
    Filter(#[from] UnknownFilter),
}

impl FromStr for Action {
    type Err = ParseError;

    /// Titles are passed through as typed; blank ones are the store's call.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        match word {
            "" | "ls" | "list" => Ok(Action::List),
            "add" | "a" => Ok(Action::Add(rest.to_string())),
            "edit" | "e" => {
                let (id, title) = split_id(rest, "edit")?;
                Ok(Action::Edit(id, title.to_string()))
            }
            "toggle" | "t" => Ok(Action::Toggle(split_id(rest, "toggle")?.0)),
            "rm" | "del" | "delete" => Ok(Action::Remove(split_id(rest, "rm")?.0)),
            "filter" | "f" => Ok(Action::Filter(rest.parse()?)),
            "help" | "?" => Ok(Action::Help),
            "quit" | "q" | "exit" => Ok(Action::Quit),
            other => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }
}

fn split_id<'a>(rest: &'a str, command: &'static str) -> Result<(TodoId, &'a str), ParseError> {
    let (id, tail) = match rest.split_once(char::is_whitespace) {
        Some((id, tail)) => (id, tail),
        None => (rest, ""),
    };
    if id.is_empty() {
        return Err(ParseError::MissingId(command));
    }
    let id = id.parse::<TodoId>().unwrap_or_else(|never| match never {});
    Ok((id, tail))
}
