//! Global Application State Store
//!
//! Latest view snapshot of each tool, as rendered by the backend.
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands::{ContactView, TodoView};
use crate::models::GameView;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub todo: TodoView,
    pub contacts: ContactView,
    pub game: GameView,
    /// Last generated password shown in the output field
    pub password: String,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
