//! To-Do Panel
//!
//! Title and description fields, the task list with search, and the
//! add/update/delete/mark buttons. Single click selects a task and shows
//! its status; double click loads it into the form.

use leptos::prelude::*;

use crate::commands::{self, TodoView};
use crate::components::RecordList;
use crate::context::notify;
use crate::models::{Notice, TaskForm};
use crate::queue::ActionQueue;
use crate::store::{use_app_store, AppStateStoreFields};

#[derive(Clone, Copy)]
struct TaskInputs {
    title: RwSignal<String>,
    description: RwSignal<String>,
}

impl TaskInputs {
    fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
        }
    }

    fn read(&self) -> TaskForm {
        TaskForm {
            title: self.title.get_untracked(),
            description: self.description.get_untracked(),
        }
    }

    fn fill(&self, form: &TaskForm) {
        self.title.set(form.title.clone());
        self.description.set(form.description.clone());
    }
}

/// Form contents are captured when the button is pressed
#[derive(Clone)]
enum TodoAction {
    Refresh,
    Add(TaskForm),
    Update(TaskForm),
    Delete,
    Mark(bool),
    Search(String),
    Select(Option<u64>),
    Load(u64),
    Clear,
}

impl TodoAction {
    /// Whether the answer's form replaces the input fields
    fn syncs_form(&self) -> bool {
        !matches!(
            self,
            TodoAction::Mark(_) | TodoAction::Search(_) | TodoAction::Select(_)
        )
    }

    async fn perform(self) -> Result<TodoView, Notice> {
        match self {
            TodoAction::Refresh => commands::todo_view().await,
            TodoAction::Add(form) => commands::todo_add(&form).await,
            TodoAction::Update(form) => commands::todo_update(&form).await,
            TodoAction::Delete => commands::todo_delete().await,
            TodoAction::Mark(completed) => commands::todo_mark(completed).await,
            TodoAction::Search(query) => commands::todo_search(&query).await,
            TodoAction::Select(key) => commands::todo_select(key).await,
            TodoAction::Load(key) => commands::todo_load(key).await,
            TodoAction::Clear => commands::todo_clear().await,
        }
    }
}

#[component]
pub fn TodoPanel() -> impl IntoView {
    let store = use_app_store();
    let inputs = TaskInputs::new();
    let (query, set_query) = signal(String::new());

    let queue = ActionQueue::new(move |action: TodoAction| async move {
        let syncs_form = action.syncs_form();
        let refresh = matches!(action, TodoAction::Refresh);
        match action.perform().await {
            Ok(view) => {
                if syncs_form {
                    inputs.fill(&view.form);
                }
                if refresh {
                    set_query.set(view.query.clone());
                }
                store.todo().set(view);
            }
            Err(notice) => {
                notify(notice);
                // a rejected select also clears the selection
                if let Ok(view) = commands::todo_view().await {
                    store.todo().set(view);
                }
            }
        }
    });
    let dispatch = move |action: TodoAction| queue.push(action);

    // Load the current view on mount
    Effect::new(move |_| dispatch(TodoAction::Refresh));

    let rows = Signal::derive(move || store.todo().read().rows.clone());
    let selected = Signal::derive(move || store.todo().read().selected);
    let on_select = Callback::new(move |key| dispatch(TodoAction::Select(key)));
    let on_activate = Callback::new(move |key| dispatch(TodoAction::Load(key)));

    view! {
        <section class="tool-panel todo-panel">
            <div class="form-grid">
                <label for="task-title">"Title"</label>
                <input
                    id="task-title"
                    type="text"
                    prop:value=move || inputs.title.get()
                    on:input=move |ev| inputs.title.set(event_target_value(&ev))
                />
                <label for="task-description">"Description"</label>
                <input
                    id="task-description"
                    type="text"
                    prop:value=move || inputs.description.get()
                    on:input=move |ev| inputs.description.set(event_target_value(&ev))
                />
            </div>

            <div class="button-row">
                <button on:click=move |_| dispatch(TodoAction::Add(inputs.read()))>"Add Task"</button>
                <button on:click=move |_| dispatch(TodoAction::Update(inputs.read()))>"Update Task"</button>
                <button on:click=move |_| dispatch(TodoAction::Delete)>"Delete Task"</button>
                <button on:click=move |_| dispatch(TodoAction::Mark(true))>"Mark Completed"</button>
                <button on:click=move |_| dispatch(TodoAction::Mark(false))>"Mark Pending"</button>
                <button on:click=move |_| dispatch(TodoAction::Clear)>"Clear"</button>
            </div>

            <div class="search-row">
                <label for="task-search">"Search"</label>
                <input
                    id="task-search"
                    type="search"
                    prop:value=move || query.get()
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        set_query.set(text.clone());
                        dispatch(TodoAction::Search(text));
                    }
                />
            </div>

            <RecordList rows=rows selected=selected on_select=on_select on_activate=on_activate />

            <p class="status-line">
                {move || format!("Status: {}", store.todo().read().status)}
                <span class="count">
                    {move || {
                        let view = store.todo().read();
                        format!("{} of {} tasks", view.rows.len(), view.total)
                    }}
                </span>
            </p>
        </section>
    }
}
