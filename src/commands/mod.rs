pub mod analyze;
pub mod auth;
pub mod history;
pub mod profile;
pub mod recipes;
pub mod settings;

use crate::history::HistoryKind;
use tauri::{AppHandle, Emitter};
use tracing::warn;

/// Emitted after any action that changed backend history so the frontend
/// refreshes its lists. Fire-and-forget; a failed emit is logged, never
/// surfaced.
pub(crate) fn notify_history_changed(app: &AppHandle, kind: HistoryKind) {
    if let Err(e) = app.emit("history-changed", kind) {
        warn!("failed to emit history-changed: {e}");
    }
}
