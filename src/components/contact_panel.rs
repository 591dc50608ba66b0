//! Contact Panel
//!
//! Contact fields, the contact list with search, and the add/update/delete
//! buttons. Selecting a contact loads it into the fields.

use leptos::prelude::*;

use crate::commands::{self, ContactView};
use crate::components::RecordList;
use crate::context::notify;
use crate::models::{ContactForm, Notice};
use crate::queue::ActionQueue;
use crate::store::{use_app_store, AppStateStoreFields};

#[derive(Clone, Copy)]
struct ContactInputs {
    name: RwSignal<String>,
    phone: RwSignal<String>,
    email: RwSignal<String>,
    address: RwSignal<String>,
}

impl ContactInputs {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            address: RwSignal::new(String::new()),
        }
    }

    fn read(&self) -> ContactForm {
        ContactForm {
            name: self.name.get_untracked(),
            phone: self.phone.get_untracked(),
            email: self.email.get_untracked(),
            address: self.address.get_untracked(),
        }
    }

    fn fill(&self, form: &ContactForm) {
        self.name.set(form.name.clone());
        self.phone.set(form.phone.clone());
        self.email.set(form.email.clone());
        self.address.set(form.address.clone());
    }
}

#[derive(Clone)]
enum ContactAction {
    Refresh,
    Add(ContactForm),
    Update(ContactForm),
    Delete,
    Search(String),
    Select(Option<u64>),
    Clear,
}

impl ContactAction {
    fn syncs_form(&self) -> bool {
        !matches!(self, ContactAction::Search(_))
    }

    async fn perform(self) -> Result<ContactView, Notice> {
        match self {
            ContactAction::Refresh => commands::contact_view().await,
            ContactAction::Add(form) => commands::contact_add(&form).await,
            ContactAction::Update(form) => commands::contact_update(&form).await,
            ContactAction::Delete => commands::contact_delete().await,
            ContactAction::Search(query) => commands::contact_search(&query).await,
            ContactAction::Select(key) => commands::contact_select(key).await,
            ContactAction::Clear => commands::contact_clear().await,
        }
    }
}

#[component]
fn Field(id: &'static str, label: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <label for=id>{label}</label>
        <input
            id=id
            type="text"
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}

#[component]
pub fn ContactPanel() -> impl IntoView {
    let store = use_app_store();
    let inputs = ContactInputs::new();
    let (query, set_query) = signal(String::new());

    let queue = ActionQueue::new(move |action: ContactAction| async move {
        let syncs_form = action.syncs_form();
        let refresh = matches!(action, ContactAction::Refresh);
        match action.perform().await {
            Ok(view) => {
                if syncs_form {
                    inputs.fill(&view.form);
                }
                if refresh {
                    set_query.set(view.query.clone());
                }
                store.contacts().set(view);
            }
            Err(notice) => {
                notify(notice);
                if let Ok(view) = commands::contact_view().await {
                    store.contacts().set(view);
                }
            }
        }
    });
    let dispatch = move |action: ContactAction| queue.push(action);

    Effect::new(move |_| dispatch(ContactAction::Refresh));

    let rows = Signal::derive(move || store.contacts().read().rows.clone());
    let selected = Signal::derive(move || store.contacts().read().selected);
    let on_select = Callback::new(move |key| dispatch(ContactAction::Select(key)));

    view! {
        <section class="tool-panel contact-panel">
            <div class="form-grid">
                <Field id="contact-name" label="Name" value=inputs.name />
                <Field id="contact-phone" label="Phone" value=inputs.phone />
                <Field id="contact-email" label="Email" value=inputs.email />
                <Field id="contact-address" label="Address" value=inputs.address />
            </div>

            <div class="button-row">
                <button on:click=move |_| dispatch(ContactAction::Add(inputs.read()))>"Add Contact"</button>
                <button on:click=move |_| dispatch(ContactAction::Update(inputs.read()))>"Update Contact"</button>
                <button on:click=move |_| dispatch(ContactAction::Delete)>"Delete Contact"</button>
                <button on:click=move |_| dispatch(ContactAction::Clear)>"Clear"</button>
            </div>

            <div class="search-row">
                <label for="contact-search">"Search"</label>
                <input
                    id="contact-search"
                    type="search"
                    placeholder="Name or phone"
                    prop:value=move || query.get()
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        set_query.set(text.clone());
                        dispatch(ContactAction::Search(text));
                    }
                />
            </div>

            <RecordList rows=rows selected=selected on_select=on_select />
        </section>
    }
}
