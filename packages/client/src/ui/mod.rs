//! UI layer: the existing-rooms component and its console front end.

pub mod command;
pub mod component;
pub mod console;
pub mod state;
pub mod view;

pub use command::{Command, CommandError};
pub use component::{ExistingRooms, FLASH_MESSAGE_TTL};
pub use console::run_console;
pub use view::{RoomRow, RoomsView, render_listing};
