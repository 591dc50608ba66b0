//! Tool Tab Bar Component

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Tool;

#[component]
pub fn ToolTabs() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <nav class="tool-tab-bar">
            {Tool::ALL.iter().map(|&tool| {
                let tab_class = move || {
                    if ctx.active_tool.get() == tool { "tool-tab active" } else { "tool-tab" }
                };
                view! {
                    <button class=tab_class on:click=move |_| ctx.open(tool)>
                        {tool.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
