use std::fs;
use std::sync::Mutex;

use tauri::State;

use crate::commands::lock_studio;
use crate::models::VersionListItem;
use crate::services::history_service::{CurrentView, Studio};

#[tauri::command]
pub fn list_versions(state: State<'_, Mutex<Studio>>) -> Result<Vec<VersionListItem>, String> {
    Ok(lock_studio(&state)?.list_versions())
}

#[tauri::command]
pub fn switch_to_version(
    state: State<'_, Mutex<Studio>>,
    index: usize,
) -> Result<CurrentView, String> {
    lock_studio(&state)?.switch_to_version(index)
}

#[tauri::command]
pub fn delete_version(
    state: State<'_, Mutex<Studio>>,
    index: usize,
) -> Result<CurrentView, String> {
    lock_studio(&state)?.delete_version(index)
}

#[tauri::command]
pub fn clear_versions(state: State<'_, Mutex<Studio>>) -> Result<CurrentView, String> {
    lock_studio(&state)?.clear_versions()
}

/// Write the current website's version list as pretty JSON.
#[tauri::command]
pub fn export_versions(
    state: State<'_, Mutex<Studio>>,
    output_path: String,
) -> Result<(), String> {
    let content = {
        let studio = lock_studio(&state)?;
        let versions = studio.current_versions().ok_or("No current website")?;
        serde_json::to_string_pretty(versions)
            .map_err(|e| format!("Failed to serialize versions: {}", e))?
    };

    fs::write(&output_path, content).map_err(|e| format!("Failed to write export: {}", e))
}
