//! Password Generator Panel

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::notify;
use crate::models::{CharClasses, Notice};
use crate::store::{use_app_store, AppStateStoreFields};

const DEFAULT_LENGTH: &str = "12";

#[component]
fn ClassToggle(label: &'static str, checked: RwSignal<bool>) -> impl IntoView {
    view! {
        <label class="class-toggle">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| checked.set(event_target_checked(&ev))
            />
            {label}
        </label>
    }
}

#[component]
pub fn PasswordPanel() -> impl IntoView {
    let store = use_app_store();
    let length = RwSignal::new(DEFAULT_LENGTH.to_string());
    let upper = RwSignal::new(false);
    let lower = RwSignal::new(false);
    let digits = RwSignal::new(false);
    let symbols = RwSignal::new(false);

    let generate = move |_| {
        let length = length.get_untracked();
        let classes = CharClasses {
            upper: upper.get_untracked(),
            lower: lower.get_untracked(),
            digits: digits.get_untracked(),
            symbols: symbols.get_untracked(),
        };
        spawn_local(async move {
            match commands::password_generate(&length, classes).await {
                Ok(password) => store.password().set(password),
                Err(notice) => notify(notice),
            }
        });
    };

    let copy = move |_| {
        spawn_local(async move {
            let copied = match commands::password_copy_text().await {
                Ok(text) => commands::write_clipboard(&text).await,
                Err(notice) => Err(notice),
            };
            match copied {
                Ok(()) => notify(Notice::info("Copied", "Password copied to clipboard!")),
                Err(notice) => notify(notice),
            }
        });
    };

    view! {
        <section class="tool-panel password-panel">
            <div class="form-grid">
                <label for="password-length">"Password Length"</label>
                <input
                    id="password-length"
                    type="text"
                    inputmode="numeric"
                    prop:value=move || length.get()
                    on:input=move |ev| length.set(event_target_value(&ev))
                />
            </div>

            <div class="class-row">
                <ClassToggle label="Uppercase" checked=upper />
                <ClassToggle label="Lowercase" checked=lower />
                <ClassToggle label="Digits" checked=digits />
                <ClassToggle label="Symbols" checked=symbols />
            </div>

            <div class="button-row">
                <button on:click=generate>"Generate Password"</button>
                <button on:click=copy>"Copy to Clipboard"</button>
            </div>

            <input
                class="password-output"
                type="text"
                readonly
                prop:value=move || store.password().get()
            />
        </section>
    }
}
