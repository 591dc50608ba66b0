//! Domain errors
//!
//! Every failure in this application is a rejected user action. The
//! display text of each variant is the message shown to the user.

use std::fmt;

use super::record::RecordKey;

/// Action that needs a selected record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Update,
    Delete,
}

impl Action {
    /// Dialog title for a rejected action
    pub fn title(&self) -> &'static str {
        match self {
            Action::Update => "Update",
            Action::Delete => "Delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Update => f.write_str("update"),
            Action::Delete => f.write_str("delete"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Task title cannot be empty.")]
    EmptyTitle,

    #[error("Name and Phone are required!")]
    MissingContactFields,

    #[error("Select a {kind} to {action}.")]
    NoSelection { kind: &'static str, action: Action },

    #[error("Please enter a positive number for length.")]
    InvalidLength,

    #[error("Password length cannot exceed {max} characters.")]
    LengthTooLarge { max: usize },

    #[error("Please select at least one character type.")]
    NoCharacterClass,

    #[error("Generate a password first.")]
    NothingToCopy,

    #[error("No entry at position {0}.")]
    OutOfRange(usize),

    #[error("That entry is no longer in the list.")]
    NotListed(RecordKey),
}

pub type DomainResult<T> = Result<T, DomainError>;
