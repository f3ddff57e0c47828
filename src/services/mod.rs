pub mod generation_client;
pub mod history_service;
pub mod preview_service;
pub mod prompts;
pub mod settings_service;
pub mod store_service;
