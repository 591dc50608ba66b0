//! Domain Layer
//!
//! Records, validation rules, search, password and game rules.
//! Nothing here knows about Tauri or shared state.

mod contact;
mod error;
mod game;
mod notice;
mod password;
mod record;
mod search;
mod task;

pub use contact::{Contact, ContactForm};
pub use error::{Action, DomainError, DomainResult};
pub use game::{Move, Outcome, Scoreboard};
pub use notice::{Notice, NoticeLevel};
pub use password::{
    generate_with, parse_length, CharClasses, DIGITS, LOWERCASE, MAX_LENGTH, SYMBOLS, UPPERCASE,
};
pub use record::{Record, RecordKey, Stored};
pub use search::visible_indices;
pub use task::{Task, TaskForm};
