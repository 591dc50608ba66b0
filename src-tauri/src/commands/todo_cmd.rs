//! Tauri Commands for the To-Do list
//!
//! Every command answers with the re-rendered list view.

use tauri::State;

use super::reject;
use crate::domain::{Notice, RecordKey, TaskForm};
use crate::state::{render_list, ListView};
use crate::AppState;

type TodoView = ListView<TaskForm>;

/// Current to-do view
#[tauri::command]
pub async fn todo_view(state: State<'_, AppState>) -> Result<TodoView, Notice> {
    let todo = state.todo.lock().await;
    Ok(render_list(&*todo))
}

/// Add a task from the form fields
#[tauri::command]
pub async fn todo_add(state: State<'_, AppState>, form: TaskForm) -> Result<TodoView, Notice> {
    let mut todo = state.todo.lock().await;
    let index = todo.add(form).map_err(|e| reject("todo_add", e))?;
    log::info!("Task added at position {}", index);
    Ok(render_list(&*todo))
}

/// Overwrite the selected task with the form fields
#[tauri::command]
pub async fn todo_update(state: State<'_, AppState>, form: TaskForm) -> Result<TodoView, Notice> {
    let mut todo = state.todo.lock().await;
    let index = todo.update(form).map_err(|e| reject("todo_update", e))?;
    log::info!("Task {} updated", index);
    Ok(render_list(&*todo))
}

#[tauri::command]
pub async fn todo_delete(state: State<'_, AppState>) -> Result<TodoView, Notice> {
    let mut todo = state.todo.lock().await;
    let removed = todo.delete().map_err(|e| reject("todo_delete", e))?;
    log::info!("Task deleted: {}", removed.title);
    Ok(render_list(&*todo))
}

/// Mark the selected task completed or pending; ignored without a selection
#[tauri::command]
pub async fn todo_mark(state: State<'_, AppState>, completed: bool) -> Result<TodoView, Notice> {
    let mut todo = state.todo.lock().await;
    if todo.mark(completed).map_err(|e| reject("todo_mark", e))? {
        log::info!("Task marked completed={}", completed);
    }
    Ok(render_list(&*todo))
}

#[tauri::command]
pub async fn todo_search(state: State<'_, AppState>, query: String) -> Result<TodoView, Notice> {
    let mut todo = state.todo.lock().await;
    todo.search(query);
    Ok(render_list(&*todo))
}

/// Select the row of a task by key (None clears the selection)
#[tauri::command]
pub async fn todo_select(
    state: State<'_, AppState>,
    key: Option<RecordKey>,
) -> Result<TodoView, Notice> {
    let mut todo = state.todo.lock().await;
    todo.select_key(key).map_err(|e| reject("todo_select", e))?;
    Ok(render_list(&*todo))
}

/// Select a task by key and copy it into the form
#[tauri::command]
pub async fn todo_load(state: State<'_, AppState>, key: RecordKey) -> Result<TodoView, Notice> {
    let mut todo = state.todo.lock().await;
    todo.select_key(Some(key)).map_err(|e| reject("todo_load", e))?;
    todo.load_selected();
    Ok(render_list(&*todo))
}

#[tauri::command]
pub async fn todo_clear(state: State<'_, AppState>) -> Result<TodoView, Notice> {
    let mut todo = state.todo.lock().await;
    todo.clear_inputs();
    Ok(render_list(&*todo))
}
