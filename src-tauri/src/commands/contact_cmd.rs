//! Tauri Commands for the Contact list

use tauri::State;

use super::reject;
use crate::domain::{ContactForm, Notice, RecordKey};
use crate::state::{render_list, ListView};
use crate::AppState;

type ContactView = ListView<ContactForm>;

#[tauri::command]
pub async fn contact_view(state: State<'_, AppState>) -> Result<ContactView, Notice> {
    let contacts = state.contacts.lock().await;
    Ok(render_list(&*contacts))
}

/// Add a contact; name and phone are required
#[tauri::command]
pub async fn contact_add(
    state: State<'_, AppState>,
    form: ContactForm,
) -> Result<ContactView, Notice> {
    let mut contacts = state.contacts.lock().await;
    let index = contacts.add(form).map_err(|e| reject("contact_add", e))?;
    log::info!("Contact added at position {}", index);
    Ok(render_list(&*contacts))
}

#[tauri::command]
pub async fn contact_update(
    state: State<'_, AppState>,
    form: ContactForm,
) -> Result<ContactView, Notice> {
    let mut contacts = state.contacts.lock().await;
    let index = contacts.update(form).map_err(|e| reject("contact_update", e))?;
    log::info!("Contact {} updated", index);
    Ok(render_list(&*contacts))
}

#[tauri::command]
pub async fn contact_delete(state: State<'_, AppState>) -> Result<ContactView, Notice> {
    let mut contacts = state.contacts.lock().await;
    let removed = contacts.delete().map_err(|e| reject("contact_delete", e))?;
    log::info!("Contact deleted: {}", removed.name);
    Ok(render_list(&*contacts))
}

#[tauri::command]
pub async fn contact_search(
    state: State<'_, AppState>,
    query: String,
) -> Result<ContactView, Notice> {
    let mut contacts = state.contacts.lock().await;
    contacts.search(query);
    Ok(render_list(&*contacts))
}

/// Selecting a contact loads it into the form right away
#[tauri::command]
pub async fn contact_select(
    state: State<'_, AppState>,
    key: Option<RecordKey>,
) -> Result<ContactView, Notice> {
    let mut contacts = state.contacts.lock().await;
    contacts.select_key(key).map_err(|e| reject("contact_select", e))?;
    contacts.load_selected();
    Ok(render_list(&*contacts))
}

#[tauri::command]
pub async fn contact_clear(state: State<'_, AppState>) -> Result<ContactView, Notice> {
    let mut contacts = state.contacts.lock().await;
    contacts.clear_inputs();
    Ok(render_list(&*contacts))
}
