//! UI Components
//!
//! Reusable Leptos components and one panel per tool.

mod contact_panel;
mod game_panel;
mod password_panel;
mod record_list;
mod title_bar;
mod todo_panel;
mod tool_tabs;

pub use contact_panel::ContactPanel;
pub use game_panel::GamePanel;
pub use password_panel::PasswordPanel;
pub use record_list::RecordList;
pub use title_bar::TitleBar;
pub use todo_panel::TodoPanel;
pub use tool_tabs::ToolTabs;
