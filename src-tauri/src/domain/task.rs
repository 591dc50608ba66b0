//! Task Entity
//!
//! A to-do entry: a required title, free-text description and a
//! completion flag toggled separately from the edit form.

use serde::{Deserialize, Serialize};

use super::error::{DomainError, DomainResult};
use super::record::{contains_ignore_case, Record};

/// A to-do task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Task title (never empty)
    pub title: String,
    /// Optional notes
    pub description: String,
    /// Completion status
    pub completed: bool,
}

/// Edit form of a task
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
}

impl TaskForm {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

impl Task {
    /// Create a pending task
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            completed: false,
        }
    }

    fn checked_title(form: &TaskForm) -> DomainResult<&str> {
        let title = form.title.trim();
        if title.is_empty() {
            return Err(DomainError::EmptyTitle);
        }
        Ok(title)
    }
}

impl Record for Task {
    const KIND: &'static str = "task";

    type Form = TaskForm;

    fn from_form(form: &TaskForm) -> DomainResult<Self> {
        let title = Self::checked_title(form)?;
        Ok(Task::new(title, form.description.trim()))
    }

    fn to_form(&self) -> TaskForm {
        TaskForm::new(self.title.clone(), self.description.clone())
    }

    fn apply_form(&mut self, form: &TaskForm) -> DomainResult<()> {
        let title = Self::checked_title(form)?;
        self.title = title.to_string();
        self.description = form.description.trim().to_string();
        Ok(())
    }

    fn matches(&self, needle: &str) -> bool {
        contains_ignore_case(&self.title, needle) || contains_ignore_case(&self.description, needle)
    }

    fn row_label(&self) -> String {
        let mark = if self.completed { "[✓]" } else { "[ ]" };
        format!("{} {}", mark, self.title)
    }

    fn status(&self) -> Option<&'static str> {
        Some(if self.completed { "Completed" } else { "Pending" })
    }

    fn completed(&self) -> Option<bool> {
        Some(self.completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_from_form_trims() {
        let task = Task::from_form(&TaskForm::new("  Buy milk ", "\n2 litres\n")).unwrap();
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description, "2 litres");
        assert!(!task.completed);
    }

    #[test]
    fn test_blank_title_rejected() {
        assert_eq!(Task::from_form(&TaskForm::new("   ", "notes")), Err(DomainError::EmptyTitle));
    }

    #[test]
    fn test_apply_form_keeps_completion() {
        let mut task = Task::new("Old", "");
        task.completed = true;
        task.apply_form(&TaskForm::new("New", "desc")).unwrap();
        assert_eq!(task.title, "New");
        assert_eq!(task.description, "desc");
        assert!(task.completed);
    }

    #[test]
    fn test_apply_form_rejects_without_change() {
        let mut task = Task::new("Keep", "me");
        assert!(task.apply_form(&TaskForm::new("", "gone")).is_err());
        assert_eq!(task, Task::new("Keep", "me"));
    }

    #[test]
    fn test_matches_title_or_description() {
        let task = Task::new("Write Report", "quarterly NUMBERS");
        assert!(task.matches("report"));
        assert!(task.matches("numbers"));
        assert!(!task.matches("invoice"));
    }

    #[test]
    fn test_row_label_and_status() {
        let mut task = Task::new("Walk", "");
        assert_eq!(task.row_label(), "[ ] Walk");
        assert_eq!(task.status(), Some("Pending"));
        task.completed = true;
        assert_eq!(task.row_label(), "[✓] Walk");
        assert_eq!(task.status(), Some("Completed"));
    }
}
