//! CodSoft Desk Backend
//!
//! Layered architecture:
//! - domain: Records, validation and game rules
//! - repository: In-memory list stores
//! - state: Per-tool application state and view rendering
//! - commands: Tauri command handlers

use tauri::Manager;
use tokio::sync::Mutex;

mod commands;
mod domain;
mod repository;
mod state;

use state::{ContactState, PasswordGenerator, RpsGame, TodoState};

/// Application state shared across commands
#[derive(Default)]
pub struct AppState {
    pub todo: Mutex<TodoState>,
    pub contacts: Mutex<ContactState>,
    pub password: Mutex<PasswordGenerator>,
    pub game: Mutex<RpsGame>,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.unminimize();
                    let _ = window.set_focus();
                }
            }))?;

            match app.path().app_log_dir() {
                Ok(dir) => {
                    if let Err(e) = rolling_logger::init_logger(dir, "CodSoftDesk") {
                        eprintln!("Failed to init rolling logger: {}", e);
                    }
                }
                Err(e) => eprintln!("No log directory available: {}", e),
            }

            app.manage(AppState::default());
            log::info!("App setup complete");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // To-do list
            commands::todo_view,
            commands::todo_add,
            commands::todo_update,
            commands::todo_delete,
            commands::todo_mark,
            commands::todo_search,
            commands::todo_select,
            commands::todo_load,
            commands::todo_clear,
            // Contacts
            commands::contact_view,
            commands::contact_add,
            commands::contact_update,
            commands::contact_delete,
            commands::contact_search,
            commands::contact_select,
            commands::contact_clear,
            // Password generator
            commands::password_generate,
            commands::password_copy_text,
            // Rock-paper-scissors
            commands::game_view,
            commands::game_play,
            commands::game_reset_round,
            // Window and dialogs
            commands::show_notice,
            commands::fit_window,
            commands::minimize_window,
            commands::close_window,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
