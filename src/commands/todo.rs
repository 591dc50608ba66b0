//! To-Do Commands
//!
//! Frontend bindings for the to-do list backend commands.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{call, to_args};
use crate::models::{ListView, Notice, TaskForm};

pub type TodoView = ListView<TaskForm>;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct FormArgs<'a> {
    form: &'a TaskForm,
}

#[derive(Serialize)]
struct MarkArgs {
    completed: bool,
}

#[derive(Serialize)]
struct QueryArgs<'a> {
    query: &'a str,
}

#[derive(Serialize)]
struct KeyArgs {
    key: Option<u64>,
}

// ========================
// Commands
// ========================

pub async fn todo_view() -> Result<TodoView, Notice> {
    call("todo_view", JsValue::NULL).await
}

pub async fn todo_add(form: &TaskForm) -> Result<TodoView, Notice> {
    call("todo_add", to_args(&FormArgs { form })?).await
}

pub async fn todo_update(form: &TaskForm) -> Result<TodoView, Notice> {
    call("todo_update", to_args(&FormArgs { form })?).await
}

pub async fn todo_delete() -> Result<TodoView, Notice> {
    call("todo_delete", JsValue::NULL).await
}

pub async fn todo_mark(completed: bool) -> Result<TodoView, Notice> {
    call("todo_mark", to_args(&MarkArgs { completed })?).await
}

pub async fn todo_search(query: &str) -> Result<TodoView, Notice> {
    call("todo_search", to_args(&QueryArgs { query })?).await
}

/// Select the row of a task by key
pub async fn todo_select(key: Option<u64>) -> Result<TodoView, Notice> {
    call("todo_select", to_args(&KeyArgs { key })?).await
}

/// Select a task by key and load it into the form
pub async fn todo_load(key: u64) -> Result<TodoView, Notice> {
    call("todo_load", to_args(&KeyArgs { key: Some(key) })?).await
}

pub async fn todo_clear() -> Result<TodoView, Notice> {
    call("todo_clear", JsValue::NULL).await
}
