//! Async helper functions for dialogs and settings IO

use std::path::PathBuf;

use crate::features::Settings;

/// Ask the user for a directory
pub async fn open_folder_dialog(title: String) -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title(title)
        .pick_folder()
        .await
        .map(|handle| handle.path().to_path_buf())
}

/// Persist settings off the UI thread
pub async fn save_settings(settings: Settings) -> anyhow::Result<()> {
    tokio::task::spawn_blocking(move || settings.save()).await??;
    Ok(())
}

/// Resolve after `secs` seconds; used to hide toasts
pub async fn sleep_secs(secs: u64) {
    tokio::time::sleep(std::time::Duration::from_secs(secs)).await;
}
