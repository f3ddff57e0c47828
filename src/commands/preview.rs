use crate::services::preview_service::{self, PreviewDocument};

/// Full isolated document plus iframe capability grants for the main
/// preview surface.
#[tauri::command]
pub fn render_preview(html: String) -> PreviewDocument {
    preview_service::interactive_document(&html)
}

/// Neutralized document for sidebar thumbnails.
#[tauri::command]
pub fn render_thumbnail(html: String) -> String {
    preview_service::thumbnail_document(&html)
}

/// Entity-escaped text for interpolating names into host markup.
#[tauri::command]
pub fn escape_text(text: String) -> String {
    preview_service::escape_html(&text)
}
