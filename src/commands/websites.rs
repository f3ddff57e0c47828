use std::fs;
use std::path::Path;
use std::sync::Mutex;

use tauri::State;

use crate::commands::lock_studio;
use crate::models::WebsiteListItem;
use crate::services::history_service::{CurrentView, Studio};

#[tauri::command]
pub fn list_websites(state: State<'_, Mutex<Studio>>) -> Result<Vec<WebsiteListItem>, String> {
    Ok(lock_studio(&state)?.list_websites())
}

#[tauri::command]
pub fn create_website(state: State<'_, Mutex<Studio>>) -> Result<CurrentView, String> {
    lock_studio(&state)?.create_website()
}

#[tauri::command]
pub fn switch_to_website(
    state: State<'_, Mutex<Studio>>,
    index: usize,
) -> Result<CurrentView, String> {
    lock_studio(&state)?.switch_to_website(index)
}

#[tauri::command]
pub fn delete_website(
    state: State<'_, Mutex<Studio>>,
    index: usize,
) -> Result<CurrentView, String> {
    lock_studio(&state)?.delete_website(index)
}

#[tauri::command]
pub fn duplicate_website(
    state: State<'_, Mutex<Studio>>,
    index: usize,
) -> Result<WebsiteListItem, String> {
    lock_studio(&state)?.duplicate_website(index)
}

#[tauri::command]
pub fn rename_website(
    state: State<'_, Mutex<Studio>>,
    index: usize,
    name: String,
) -> Result<(), String> {
    lock_studio(&state)?.rename_website(index, &name)
}

/// Read a local HTML file and seed a new website from its content.
#[tauri::command]
pub fn import_html_file(
    state: State<'_, Mutex<Studio>>,
    path: String,
) -> Result<CurrentView, String> {
    let content =
        fs::read_to_string(&path).map_err(|e| format!("Failed to read file {}: {}", path, e))?;
    let source_name = Path::new(&path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("file.html");

    lock_studio(&state)?.import_website(&content, source_name)
}

/// Write one website as a pretty JSON document to a user-chosen path.
#[tauri::command]
pub fn export_website(
    state: State<'_, Mutex<Studio>>,
    index: usize,
    output_path: String,
) -> Result<(), String> {
    let content = {
        let studio = lock_studio(&state)?;
        let website = studio
            .website_at(index)
            .ok_or_else(|| format!("No website at index {}", index))?;
        serde_json::to_string_pretty(website)
            .map_err(|e| format!("Failed to serialize website: {}", e))?
    };

    fs::write(&output_path, content).map_err(|e| format!("Failed to write export: {}", e))
}

/// Default filename offered by the export dialog.
#[tauri::command]
pub fn suggested_export_name(
    state: State<'_, Mutex<Studio>>,
    index: usize,
) -> Result<String, String> {
    let studio = lock_studio(&state)?;
    let website = studio
        .website_at(index)
        .ok_or_else(|| format!("No website at index {}", index))?;
    Ok(format!("{}.json", slug::slugify(&website.name)))
}
