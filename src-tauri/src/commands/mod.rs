//! Commands Layer
//!
//! Tauri command handlers that bridge the frontend to the tool states.
//! Rejected operations come back as a [`Notice`] the window shows in a dialog.

mod contact_cmd;
mod dialog_cmd;
mod game_cmd;
mod password_cmd;
mod todo_cmd;
mod window_cmd;

pub use contact_cmd::*;
pub use dialog_cmd::*;
pub use game_cmd::*;
pub use password_cmd::*;
pub use todo_cmd::*;
pub use window_cmd::*;

use crate::domain::{DomainError, Notice};

/// Log a rejected operation and turn it into the notice shown to the user
pub(crate) fn reject(operation: &str, err: DomainError) -> Notice {
    log::warn!("{} rejected: {}", operation, err);
    Notice::from(err)
}
