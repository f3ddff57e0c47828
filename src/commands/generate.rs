use std::sync::Mutex;

use tauri::State;

use crate::commands::lock_studio;
use crate::services::generation_client::{GenerationClient, REASONING_MODEL};
use crate::services::history_service::{CurrentView, Stats, Studio};
use crate::services::settings_service;

/// One full generation turn: append the user message, call the endpoint
/// once, and on success record the response as a new version. A failed
/// request returns the error to the frontend with nothing persisted for
/// the turn.
#[tauri::command]
pub async fn generate_website(
    state: State<'_, Mutex<Studio>>,
    prompt: String,
    model: String,
) -> Result<CurrentView, String> {
    // Snapshot what the request needs, then release the lock for the
    // duration of the network call.
    let (transcript, reasoning_effort) = {
        let mut studio = lock_studio(&state)?;
        let transcript = studio.begin_generation(&prompt)?;
        let effort = if model == REASONING_MODEL {
            Some(settings_service::reasoning_effort(studio.store()))
        } else {
            None
        };
        (transcript, effort)
    };

    let client = GenerationClient::default();
    let html = client
        .generate(transcript, &model, reasoning_effort.as_deref())
        .await?;

    lock_studio(&state)?.record_generation(&model, &html)
}

#[tauri::command]
pub fn get_stats(state: State<'_, Mutex<Studio>>) -> Result<Stats, String> {
    Ok(lock_studio(&state)?.stats())
}
