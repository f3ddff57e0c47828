mod websites;
mod versions;
mod generate;
mod preview;
mod settings;

pub use websites::*;
pub use versions::*;
pub use generate::*;
pub use preview::*;
pub use settings::*;

use std::sync::{Mutex, MutexGuard};

use tauri::State;

use crate::services::history_service::Studio;

pub(crate) fn lock_studio<'a>(
    state: &'a State<'_, Mutex<Studio>>,
) -> Result<MutexGuard<'a, Studio>, String> {
    state
        .lock()
        .map_err(|_| "Application state is unavailable".to_string())
}
