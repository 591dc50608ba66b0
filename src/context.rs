//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::models::{Notice, Tool};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Tool whose tab is shown - read
    pub active_tool: ReadSignal<Tool>,
    /// Tool whose tab is shown - write
    set_active_tool: WriteSignal<Tool>,
}

impl AppContext {
    pub fn new(active_tool: (ReadSignal<Tool>, WriteSignal<Tool>)) -> Self {
        Self {
            active_tool: active_tool.0,
            set_active_tool: active_tool.1,
        }
    }

    /// Switch tabs and fit the window to the tool
    pub fn open(&self, tool: Tool) {
        if self.active_tool.get_untracked() == tool {
            return;
        }
        self.set_active_tool.set(tool);
        let (width, height) = tool.window_size();
        spawn_local(async move {
            if let Err(notice) = commands::fit_window(width, height).await {
                web_sys::console::warn_1(&notice.message.into());
            }
        });
    }
}

/// Show a notice as a modal dialog
pub fn notify(notice: Notice) {
    spawn_local(async move {
        if commands::show_notice(&notice).await.is_err() {
            web_sys::console::error_1(&format!("[NOTICE] {}: {}", notice.title, notice.message).into());
        }
    });
}
