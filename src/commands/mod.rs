//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by tool.

mod contact;
mod dialog;
mod game;
mod password;
mod todo;
mod window;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::models::Notice;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// Re-export all public items
pub use contact::*;
pub use dialog::*;
pub use game::*;
pub use password::*;
pub use todo::*;
pub use window::*;

/// Invoke a command and decode its answer. A rejected invoke carries the
/// backend's `Notice`; anything else becomes a generic error notice.
async fn call<T: DeserializeOwned>(cmd: &str, args: JsValue) -> Result<T, Notice> {
    match invoke(cmd, args).await {
        Ok(value) => serde_wasm_bindgen::from_value(value)
            .map_err(|e| Notice::error("Error", &e.to_string())),
        Err(err) => Err(serde_wasm_bindgen::from_value(err.clone()).unwrap_or_else(|_| {
            let message = err.as_string().unwrap_or_else(|| format!("{:?}", err));
            Notice::error("Error", &message)
        })),
    }
}

fn to_args<A: Serialize>(args: &A) -> Result<JsValue, Notice> {
    serde_wasm_bindgen::to_value(args).map_err(|e| Notice::error("Error", &e.to_string()))
}
