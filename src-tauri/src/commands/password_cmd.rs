//! Tauri Commands for the Password Generator

use tauri::State;

use super::reject;
use crate::domain::{CharClasses, Notice};
use crate::AppState;

/// Generate a password from the raw length field and the checked classes
#[tauri::command]
pub async fn password_generate(
    state: State<'_, AppState>,
    length: String,
    classes: CharClasses,
) -> Result<String, Notice> {
    let mut generator = state.password.lock().await;
    let password = generator
        .generate(&length, classes)
        .map_err(|e| reject("password_generate", e))?;
    log::info!(
        "Password generated ({} chars, {:?})",
        password.chars().count(),
        classes
    );
    Ok(password.to_string())
}

/// Last generated password, for the clipboard
#[tauri::command]
pub async fn password_copy_text(state: State<'_, AppState>) -> Result<String, Notice> {
    let generator = state.password.lock().await;
    let text = generator
        .copy_text()
        .map_err(|e| reject("password_copy_text", e))?;
    Ok(text.to_string())
}
