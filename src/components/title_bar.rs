//! Custom Title Bar Component
//!
//! Provides window controls (minimize, close) in a draggable title bar.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;

#[component]
pub fn TitleBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let minimize = move |_| {
        spawn_local(async {
            let _ = commands::minimize_window().await;
        });
    };

    let close = move |_| {
        spawn_local(async {
            let _ = commands::close_window().await;
        });
    };

    view! {
        <div class="custom-titlebar">
            <div class="titlebar-drag-region" data-tauri-drag-region>
                <img src="public/icon.png" class="titlebar-icon" alt="" />
                <span class="titlebar-title">
                    {move || format!("CodSoft Desk · {}", ctx.active_tool.get().label())}
                </span>
            </div>
            <div class="titlebar-controls">
                <button class="titlebar-btn minimize" title="Minimize" on:click=minimize>
                    "─"
                </button>
                <button class="titlebar-btn close" title="Close" on:click=close>
                    "✕"
                </button>
            </div>
        </div>
    }
}
