use super::notify_history_changed;
use crate::api::ApiClient;
use crate::error::Error;
use crate::history::{self, HistoryItem, HistoryKind};
use tauri::{AppHandle, State};

/// All three history feeds merged newest-first. An endpoint failing only
/// empties its own kind; the command itself does not fail for that.
#[tauri::command]
pub async fn load_history(api: State<'_, ApiClient>) -> Result<Vec<HistoryItem>, Error> {
    Ok(history::load_combined(&api).await)
}

#[tauri::command]
pub async fn clear_history(
    app: AppHandle,
    api: State<'_, ApiClient>,
    kind: HistoryKind,
) -> Result<(), Error> {
    match kind {
        HistoryKind::Text => api.clear_analysis_history().await?,
        HistoryKind::Image => api.clear_image_history().await?,
        HistoryKind::Menu => api.clear_menu_history().await?,
    }
    notify_history_changed(&app, kind);
    Ok(())
}
