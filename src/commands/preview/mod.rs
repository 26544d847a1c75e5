pub mod server;

use tokio::sync::oneshot;

use crate::types::errors::{CommandError, CommandResult};
use server::PreviewState;

/// Start the live preview server for a project folder.
///
/// Only one server runs at a time; starting while one is active is an
/// error so the frontend can surface it instead of silently re-serving a
/// different folder. Returns the URL the preview is reachable at.
#[tauri::command]
pub async fn start_preview_server(
    folder: String,
    state: tauri::State<'_, PreviewState>,
) -> CommandResult<String> {
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    if !state.install(shutdown_tx) {
        return Err(CommandError::Preview("Server is already running".into()));
    }

    let (addr, server) = match server::bind(folder.clone(), shutdown_rx) {
        Ok(bound) => bound,
        Err(e) => {
            // Release the slot so a later start can succeed
            state.take();
            return Err(CommandError::Internal(format!(
                "Failed to bind preview server: {e}"
            )));
        }
    };

    tauri::async_runtime::spawn(server);
    log::info!("Preview server started at http://{addr} serving {folder}");
    Ok(format!("http://{addr}"))
}

/// Stop the running preview server.
#[tauri::command]
pub async fn stop_preview_server(state: tauri::State<'_, PreviewState>) -> CommandResult<()> {
    match state.take() {
        Some(shutdown_tx) => {
            let _ = shutdown_tx.send(());
            log::info!("Preview server stopped");
            Ok(())
        }
        None => Err(CommandError::Preview("No server running".into())),
    }
}
