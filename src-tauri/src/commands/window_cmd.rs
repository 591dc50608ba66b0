//! Window Commands
//!
//! The window is frameless; the title bar buttons and tool switching go
//! through these.

use tauri::{AppHandle, Manager};

/// Resize the main window to fit the active tool.
/// Skips resizing if the window is maximized to prevent an accidental restore.
#[tauri::command]
pub async fn fit_window(app: AppHandle, width: f64, height: f64) -> Result<(), String> {
    #[cfg(not(any(target_os = "android", target_os = "ios")))]
    {
        let window = app.get_webview_window("main").ok_or("Window not found")?;

        if window.is_maximized().unwrap_or(false) {
            return Ok(());
        }

        window
            .set_size(tauri::Size::Logical(tauri::LogicalSize { width, height }))
            .map_err(|e| e.to_string())?;
        log::info!("Window fitted to {}x{}", width, height);
    }

    Ok(())
}

#[tauri::command]
pub async fn minimize_window(app: AppHandle) -> Result<(), String> {
    #[cfg(not(any(target_os = "android", target_os = "ios")))]
    {
        let window = app.get_webview_window("main").ok_or("Window not found")?;
        window.minimize().map_err(|e| e.to_string())?;
    }
    Ok(())
}

#[tauri::command]
pub async fn close_window(app: AppHandle) -> Result<(), String> {
    #[cfg(not(any(target_os = "android", target_os = "ios")))]
    {
        let window = app.get_webview_window("main").ok_or("Window not found")?;
        window.close().map_err(|e| e.to_string())?;
    }
    Ok(())
}
