//! State Layer
//!
//! Per-tool application state and the views rendered from it.

mod game;
mod list_state;
mod password;
mod todo;
mod view;

pub use game::{Round, RpsGame};
pub use list_state::ListState;
pub use password::PasswordGenerator;
pub use todo::{ContactState, TodoState};
pub use view::{render_game, render_list, GameView, ListRow, ListView};
