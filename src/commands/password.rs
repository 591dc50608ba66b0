//! Password Commands

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{call, to_args};
use crate::models::{CharClasses, Notice};

#[derive(Serialize)]
struct GenerateArgs<'a> {
    length: &'a str,
    classes: CharClasses,
}

/// Generate a password; `length` is the raw text of the length field
pub async fn password_generate(length: &str, classes: CharClasses) -> Result<String, Notice> {
    call("password_generate", to_args(&GenerateArgs { length, classes })?).await
}

pub async fn password_copy_text() -> Result<String, Notice> {
    call("password_copy_text", JsValue::NULL).await
}

/// Put text on the system clipboard
pub async fn write_clipboard(text: &str) -> Result<(), Notice> {
    let window = web_sys::window().ok_or_else(|| Notice::error("Error", "No window"))?;
    let promise = window.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| Notice::error("Clipboard", &format!("{:?}", e)))
}
