mod commands;
mod models;
mod services;

use std::sync::Mutex;

use commands::*;
use services::history_service::Studio;
use services::store_service::Store;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .plugin(
            tauri_plugin_log::Builder::new()
                .target(tauri_plugin_log::Target::new(
                    tauri_plugin_log::TargetKind::LogDir {
                        file_name: Some("siteforge.log".into()),
                    },
                ))
                .level(log::LevelFilter::Info)
                .build(),
        )
        .setup(|app| {
            let store = Store::open_default()?;
            let studio = Studio::bootstrap(store)?;
            app.manage(Mutex::new(studio));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Website commands
            list_websites,
            create_website,
            switch_to_website,
            delete_website,
            duplicate_website,
            rename_website,
            import_html_file,
            export_website,
            suggested_export_name,
            // Version commands
            list_versions,
            switch_to_version,
            delete_version,
            clear_versions,
            export_versions,
            // Generation commands
            generate_website,
            get_stats,
            // Preview commands
            render_preview,
            render_thumbnail,
            escape_text,
            // Settings commands
            get_dark_mode,
            set_dark_mode,
            get_sidebar_position,
            set_sidebar_position,
            get_assistant_prompt,
            set_assistant_prompt,
            restore_assistant_prompt,
            get_model_color_display,
            set_model_color_display,
            get_reasoning_effort,
            set_reasoning_effort,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
