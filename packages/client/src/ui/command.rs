//! Console commands understood by the interactive front end.

use std::str::FromStr;

use thiserror::Error;

use crate::domain::{RoomId, ValueObjectError};

/// Help text listing every command
pub const HELP_TEXT: &str = "\
Commands:
  list              show the current page (same as an empty line)
  page <n>          go to page n
  next | prev       go to the following / preceding page
  filter <text>     show only room types containing <text>
  clear             remove the filter
  types             list available room types
  add               show where a new room is added
  view <id>         show a room
  edit <id>         show where a room is edited
  delete <id>       delete a room
  reload            load the room list again
  help              show this help
  quit | exit       leave
";

/// A parsed console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Page(usize),
    Next,
    Prev,
    Filter(String),
    Clear,
    Types,
    Add,
    View(RoomId),
    Edit(RoomId),
    Delete(RoomId),
    Reload,
    Help,
    Quit,
}

/// Errors produced while parsing a console line
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0} (type `help` for the list of commands)")]
    Unknown(String),

    #[error("`{command}` needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Invalid page number: {0}")]
    InvalidPage(String),

    #[error("Invalid room id: {0}")]
    InvalidRoomId(#[from] ValueObjectError),
}

fn room_id_argument(command: &'static str, rest: &str) -> Result<RoomId, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            argument: "a room id",
        });
    }
    Ok(rest.parse::<RoomId>()?)
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        match name.to_lowercase().as_str() {
            "" | "list" | "ls" => Ok(Command::List),
            "page" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "page",
                        argument: "a page number",
                    });
                }
                rest.parse::<usize>()
                    .map(Command::Page)
                    .map_err(|_| CommandError::InvalidPage(rest.to_string()))
            }
            "next" | "n" => Ok(Command::Next),
            "prev" | "p" => Ok(Command::Prev),
            "filter" | "f" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "filter",
                        argument: "a room type",
                    });
                }
                Ok(Command::Filter(rest.to_string()))
            }
            "clear" => Ok(Command::Clear),
            "types" => Ok(Command::Types),
            "add" | "new" => Ok(Command::Add),
            "view" => room_id_argument("view", rest).map(Command::View),
            "edit" => room_id_argument("edit", rest).map(Command::Edit),
            "delete" | "rm" => room_id_argument("delete", rest).map(Command::Delete),
            "reload" | "r" => Ok(Command::Reload),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
