//! Contact Commands

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{call, to_args};
use crate::models::{ContactForm, ListView, Notice};

pub type ContactView = ListView<ContactForm>;

#[derive(Serialize)]
struct FormArgs<'a> {
    form: &'a ContactForm,
}

#[derive(Serialize)]
struct QueryArgs<'a> {
    query: &'a str,
}

#[derive(Serialize)]
struct KeyArgs {
    key: Option<u64>,
}

pub async fn contact_view() -> Result<ContactView, Notice> {
    call("contact_view", JsValue::NULL).await
}

pub async fn contact_add(form: &ContactForm) -> Result<ContactView, Notice> {
    call("contact_add", to_args(&FormArgs { form })?).await
}

pub async fn contact_update(form: &ContactForm) -> Result<ContactView, Notice> {
    call("contact_update", to_args(&FormArgs { form })?).await
}

pub async fn contact_delete() -> Result<ContactView, Notice> {
    call("contact_delete", JsValue::NULL).await
}

pub async fn contact_search(query: &str) -> Result<ContactView, Notice> {
    call("contact_search", to_args(&QueryArgs { query })?).await
}

/// Select a contact by key; the backend loads it into the form
pub async fn contact_select(key: Option<u64>) -> Result<ContactView, Notice> {
    call("contact_select", to_args(&KeyArgs { key })?).await
}

pub async fn contact_clear() -> Result<ContactView, Notice> {
    call("contact_clear", JsValue::NULL).await
}
