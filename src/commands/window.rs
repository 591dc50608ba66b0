//! Window Commands
//!
//! Frontend bindings for the frameless window controls.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{call, to_args};
use crate::models::Notice;

#[derive(Serialize)]
struct SizeArgs {
    width: f64,
    height: f64,
}

/// Resize the window to fit a tool (skipped while maximized)
pub async fn fit_window(width: f64, height: f64) -> Result<(), Notice> {
    call("fit_window", to_args(&SizeArgs { width, height })?).await
}

pub async fn minimize_window() -> Result<(), Notice> {
    call("minimize_window", JsValue::NULL).await
}

pub async fn close_window() -> Result<(), Notice> {
    call("close_window", JsValue::NULL).await
}
