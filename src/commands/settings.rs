use std::sync::Mutex;

use tauri::State;

use crate::commands::lock_studio;
use crate::services::history_service::Studio;
use crate::services::settings_service;

#[tauri::command]
pub fn get_dark_mode(state: State<'_, Mutex<Studio>>) -> Result<bool, String> {
    Ok(settings_service::dark_mode(lock_studio(&state)?.store()))
}

#[tauri::command]
pub fn set_dark_mode(state: State<'_, Mutex<Studio>>, enabled: bool) -> Result<(), String> {
    settings_service::set_dark_mode(lock_studio(&state)?.store_mut(), enabled)
}

#[tauri::command]
pub fn get_sidebar_position(state: State<'_, Mutex<Studio>>) -> Result<String, String> {
    Ok(settings_service::sidebar_position(lock_studio(&state)?.store()))
}

#[tauri::command]
pub fn set_sidebar_position(
    state: State<'_, Mutex<Studio>>,
    position: String,
) -> Result<(), String> {
    settings_service::set_sidebar_position(lock_studio(&state)?.store_mut(), &position)
}

#[tauri::command]
pub fn get_assistant_prompt(state: State<'_, Mutex<Studio>>) -> Result<String, String> {
    Ok(settings_service::assistant_prompt(lock_studio(&state)?.store()))
}

#[tauri::command]
pub fn set_assistant_prompt(state: State<'_, Mutex<Studio>>, prompt: String) -> Result<(), String> {
    settings_service::set_assistant_prompt(lock_studio(&state)?.store_mut(), &prompt)
}

#[tauri::command]
pub fn restore_assistant_prompt(state: State<'_, Mutex<Studio>>) -> Result<String, String> {
    settings_service::restore_assistant_prompt(lock_studio(&state)?.store_mut())
}

#[tauri::command]
pub fn get_model_color_display(state: State<'_, Mutex<Studio>>) -> Result<bool, String> {
    Ok(settings_service::model_color_display(lock_studio(&state)?.store()))
}

#[tauri::command]
pub fn set_model_color_display(
    state: State<'_, Mutex<Studio>>,
    enabled: bool,
) -> Result<(), String> {
    settings_service::set_model_color_display(lock_studio(&state)?.store_mut(), enabled)
}

#[tauri::command]
pub fn get_reasoning_effort(state: State<'_, Mutex<Studio>>) -> Result<String, String> {
    Ok(settings_service::reasoning_effort(lock_studio(&state)?.store()))
}

#[tauri::command]
pub fn set_reasoning_effort(state: State<'_, Mutex<Studio>>, effort: String) -> Result<(), String> {
    settings_service::set_reasoning_effort(lock_studio(&state)?.store_mut(), &effort)
}
