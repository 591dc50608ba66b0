//! Frontend Models
//!
//! Data structures matching backend views and arguments.

use serde::{Deserialize, Serialize};

/// To-do form fields (matches backend)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
}

/// Contact form fields (matches backend)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// One row of a rendered list
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListRow {
    pub key: u64,
    pub label: String,
    pub completed: Option<bool>,
}

/// Rendered list tool state
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListView<F> {
    pub query: String,
    pub rows: Vec<ListRow>,
    pub selected: Option<usize>,
    pub form: F,
    pub status: String,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GameView {
    pub user_move: Option<String>,
    pub machine_move: Option<String>,
    pub result: Option<String>,
    pub score: String,
    pub user_score: u32,
    pub computer_score: u32,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            user_move: None,
            machine_move: None,
            result: None,
            score: "User: 0 | Computer: 0".to_string(),
            user_score: 0,
            computer_score: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    pub fn label(&self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        }
    }
}

/// Enabled password character classes (matches backend)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharClasses {
    pub upper: bool,
    pub lower: bool,
    pub digits: bool,
    pub symbols: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// User-facing message returned by rejected commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: &str, message: &str) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    pub fn error(title: &str, message: &str) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.to_string(),
            message: message.to_string(),
        }
    }
}

/// The four tools, shown as tabs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tool {
    #[default]
    Todo,
    Password,
    Contacts,
    Game,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Todo, Tool::Password, Tool::Contacts, Tool::Game];

    pub fn label(&self) -> &'static str {
        match self {
            Tool::Todo => "To-Do List",
            Tool::Password => "Password Generator",
            Tool::Contacts => "Contact Book",
            Tool::Game => "Rock Paper Scissors",
        }
    }

    /// Logical window size for the tool
    pub fn window_size(&self) -> (f64, f64) {
        match self {
            Tool::Todo => (700.0, 450.0),
            Tool::Password => (500.0, 300.0),
            Tool::Contacts => (650.0, 420.0),
            Tool::Game => (450.0, 350.0),
        }
    }
}
