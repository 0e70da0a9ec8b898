//! Interactive console front end.
//!
//! rustyline blocks, so the prompt runs on its own thread and hands lines to
//! the async loop over a channel. The thread only prompts again once the
//! previous line has been handled, so output never lands after a prompt.

use std::{sync::mpsc as std_mpsc, thread};

use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::{domain::RoomFilter, error::ClientError};

use super::{
    command::{Command, HELP_TEXT},
    component::ExistingRooms,
    view::{render_listing, render_room_detail, render_room_types},
};

const PROMPT: &str = "rooms> ";

/// Route of the screen where new rooms are created
pub const ADD_ROOM_ROUTE: &str = "/add-room";

/// What the console loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and keep going
    Continue(String),
    Quit,
}

async fn listing(component: &ExistingRooms) -> String {
    render_listing(&component.view().await)
}

/// Run a parsed command against the component
pub async fn execute(component: &ExistingRooms, command: Command) -> Outcome {
    debug!(?command, "console command");
    let text = match command {
        Command::List => listing(component).await,
        Command::Next => {
            component.next_page().await;
            listing(component).await
        }
        Command::Prev => {
            component.previous_page().await;
            listing(component).await
        }
        Command::Clear => {
            component.clear_filter().await;
            listing(component).await
        }
        Command::Reload => {
            component.refresh().await;
            listing(component).await
        }
        Command::Page(page) => match component.go_to_page(page).await {
            Ok(()) => listing(component).await,
            Err(e) => format!("{e}\n"),
        },
        Command::Filter(needle) => {
            component
                .set_filter(RoomFilter::by_room_type(&needle))
                .await;
            listing(component).await
        }
        Command::Types => render_room_types(&component.room_types().await),
        Command::View(id) => match component.room(id).await {
            Some(room) => render_room_detail(&room),
            None => format!("Room {id} not found\n"),
        },
        Command::Add => format!("Add a room at {ADD_ROOM_ROUTE}\n"),
        Command::Edit(id) => format!("Edit room {id} at /edit-room/{id}\n"),
        Command::Delete(id) => {
            component.delete_room(id).await;
            listing(component).await
        }
        Command::Help => HELP_TEXT.to_string(),
        Command::Quit => return Outcome::Quit,
    };
    Outcome::Continue(text)
}

enum Input {
    Line(String),
    Eof,
    Failed(String),
}

fn spawn_prompt(
    lines: mpsc::UnboundedSender<Input>,
    ready: std_mpsc::Receiver<()>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut editor = match DefaultEditor::new() {
            Ok(editor) => editor,
            Err(e) => {
                let _ = lines.send(Input::Failed(e.to_string()));
                return;
            }
        };

        while ready.recv().is_ok() {
            let input = match editor.readline(PROMPT) {
                Ok(line) => {
                    let _ = editor.add_history_entry(line.as_str());
                    Input::Line(line)
                }
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => Input::Eof,
                Err(e) => Input::Failed(e.to_string()),
            };
            let last = !matches!(input, Input::Line(_));
            if lines.send(input).is_err() || last {
                break;
            }
        }
    })
}

/// Mount the component, show the first page and serve commands until quit.
///
/// The component is unmounted on the way out, whatever the reason.
pub async fn run_console(component: ExistingRooms) -> Result<(), ClientError> {
    if let Err(e) = component.mount().await {
        warn!(error = %e, "initial room load task failed");
    }
    print!("{}", render_listing(&component.view().await));
    println!("Type `help` for the list of commands.");

    let (line_tx, mut line_rx) = mpsc::unbounded_channel();
    let (ready_tx, ready_rx) = std_mpsc::channel();
    // Detached: the thread ends at its next prompt once `ready_tx` is dropped.
    let _prompt = spawn_prompt(line_tx, ready_rx);

    let mut result = Ok(());
    loop {
        if ready_tx.send(()).is_err() {
            break;
        }
        let Some(input) = line_rx.recv().await else {
            break;
        };
        match input {
            Input::Line(line) => match line.parse::<Command>() {
                Ok(command) => match execute(&component, command).await {
                    Outcome::Continue(text) => print!("{text}"),
                    Outcome::Quit => break,
                },
                Err(e) => println!("{e}"),
            },
            Input::Eof => break,
            Input::Failed(e) => {
                result = Err(ClientError::Readline(e));
                break;
            }
        }
    }

    component.unmount();
    result
}
