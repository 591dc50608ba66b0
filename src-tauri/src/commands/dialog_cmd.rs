use tauri::{command, AppHandle, Runtime};
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};

use crate::domain::{Notice, NoticeLevel};

/// Show a modal message box for a notice
#[command]
pub async fn show_notice<R: Runtime>(app: AppHandle<R>, notice: Notice) -> Result<(), String> {
    let kind = match notice.level {
        NoticeLevel::Info => MessageDialogKind::Info,
        NoticeLevel::Warning => MessageDialogKind::Warning,
        NoticeLevel::Error => MessageDialogKind::Error,
    };
    app.dialog()
        .message(notice.message)
        .title(notice.title)
        .kind(kind)
        .blocking_show();
    Ok(())
}
