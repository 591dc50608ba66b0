//! CodSoft Desk Frontend App
//!
//! Title bar, tool tabs and one panel per tool. All panels stay mounted so
//! their input fields survive tab switches; only the active one is shown.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ContactPanel, GamePanel, PasswordPanel, TitleBar, TodoPanel, ToolTabs};
use crate::context::AppContext;
use crate::models::Tool;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let active_tool = signal(Tool::default());

    // Provide context to all children
    let ctx = AppContext::new(active_tool);
    provide_context(ctx);
    provide_context(Store::new(AppState::default()));

    let panel_class = move |tool: Tool| {
        move || if ctx.active_tool.get() == tool { "panel-slot active" } else { "panel-slot" }
    };

    view! {
        <div class="app-layout">
            <TitleBar />
            <ToolTabs />
            <main class="main-content">
                <div class=panel_class(Tool::Todo)><TodoPanel /></div>
                <div class=panel_class(Tool::Password)><PasswordPanel /></div>
                <div class=panel_class(Tool::Contacts)><ContactPanel /></div>
                <div class=panel_class(Tool::Game)><GamePanel /></div>
            </main>
        </div>
    }
}
