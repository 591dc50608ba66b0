//! Record List Component
//!
//! Single-selection list shared by the to-do and contact panels. Rows and
//! selection come from the backend view; clicks are reported upward by
//! record key.

use leptos::prelude::*;

use crate::models::ListRow;

#[component]
pub fn RecordList(
    rows: Signal<Vec<ListRow>>,
    selected: Signal<Option<usize>>,
    /// Called with the key of the clicked row
    on_select: Callback<Option<u64>>,
    /// Called with the row key on double click, after the row is selected
    #[prop(optional)]
    on_activate: Option<Callback<u64>>,
) -> impl IntoView {
    view! {
        <ul class="record-list" role="listbox">
            <For
                each=move || rows.get().into_iter().enumerate()
                key=|(pos, row)| (row.key, *pos, row.label.clone())
                children=move |(pos, row)| {
                    let key = row.key;
                    let is_selected = move || selected.get() == Some(pos);
                    let row_class = move || {
                        let mut class = String::from("record-row");
                        if is_selected() {
                            class.push_str(" selected");
                        }
                        if row.completed == Some(true) {
                            class.push_str(" completed");
                        }
                        class
                    };
                    view! {
                        <li
                            class=row_class
                            aria-selected=move || is_selected().to_string()
                            on:click=move |_| on_select.run(Some(key))
                            on:dblclick=move |_| {
                                if let Some(activate) = on_activate {
                                    activate.run(key);
                                }
                            }
                        >
                            {row.label.clone()}
                        </li>
                    }
                }
            />
            <Show when=move || rows.with(|r| r.is_empty())>
                <li class="record-empty">"Nothing to show"</li>
            </Show>
        </ul>
    }
}
