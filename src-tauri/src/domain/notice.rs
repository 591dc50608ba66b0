//! User Notices
//!
//! The serializable form of a rejected action, returned by every command
//! and shown by the frontend as a blocking message dialog.

use serde::{Deserialize, Serialize};

use super::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, title, message)
    }
}

impl From<DomainError> for Notice {
    fn from(err: DomainError) -> Self {
        let message = err.to_string();
        match err {
            DomainError::EmptyTitle => Notice::warning("Warning", message),
            DomainError::MissingContactFields => Notice::warning("Input Error", message),
            DomainError::NoSelection { action, .. } => Notice::info(action.title(), message),
            DomainError::InvalidLength | DomainError::LengthTooLarge { .. } => {
                Notice::error("Invalid length", message)
            }
            DomainError::NoCharacterClass => Notice::error("No characters selected", message),
            DomainError::NothingToCopy => Notice::info("Nothing to copy", message),
            DomainError::OutOfRange(_) => Notice::error("Error", message),
            DomainError::NotListed(_) => Notice::info("Select", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Action;

    #[test]
    fn test_no_selection_is_informational() {
        let notice = Notice::from(DomainError::NoSelection { kind: "task", action: Action::Update });
        assert_eq!(notice.level, NoticeLevel::Info);
        assert_eq!(notice.title, "Update");
        assert_eq!(notice.message, "Select a task to update.");
    }

    #[test]
    fn test_password_errors_are_errors() {
        let notice = Notice::from(DomainError::NoCharacterClass);
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.title, "No characters selected");
    }

    #[test]
    fn test_length_too_large_titled_invalid_length() {
        let notice = Notice::from(DomainError::LengthTooLarge { max: 10 });
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.title, "Invalid length");
        assert_eq!(notice.message, "Password length cannot exceed 10 characters.");
    }

    #[test]
    fn test_serializes_lowercase_level() {
        let json = serde_json::to_string(&Notice::warning("Warning", "x")).unwrap();
        assert_eq!(json, r#"{"level":"warning","title":"Warning","message":"x"}"#);
    }
}
