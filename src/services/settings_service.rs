use crate::services::prompts::DEFAULT_ASSISTANT_PROMPT;
use crate::services::store_service::Store;

const DARK_MODE_KEY: &str = "darkMode";
const SIDEBAR_POSITION_KEY: &str = "sidebarPosition";
const ASSISTANT_PROMPT_KEY: &str = "assistantPrompt";
const MODEL_COLOR_KEY: &str = "modelColorDisplay";
const REASONING_EFFORT_KEY: &str = "reasoningEffort";

/// Dark mode, stored as "enabled"/"disabled". Default: disabled.
pub fn dark_mode(store: &Store) -> bool {
    store.get(DARK_MODE_KEY) == Some("enabled")
}

pub fn set_dark_mode(store: &mut Store, enabled: bool) -> Result<(), String> {
    store.set(DARK_MODE_KEY, if enabled { "enabled" } else { "disabled" })
}

/// Sidebar position, "left" or "right". Default: "right".
pub fn sidebar_position(store: &Store) -> String {
    store.get(SIDEBAR_POSITION_KEY).unwrap_or("right").to_string()
}

pub fn set_sidebar_position(store: &mut Store, position: &str) -> Result<(), String> {
    match position {
        "left" | "right" => store.set(SIDEBAR_POSITION_KEY, position),
        other => Err(format!("Invalid sidebar position: {}", other)),
    }
}

/// The assistant persona seeded into every new transcript. Falls back to
/// the built-in default when no override has been saved.
pub fn assistant_prompt(store: &Store) -> String {
    store
        .get(ASSISTANT_PROMPT_KEY)
        .filter(|p| !p.is_empty())
        .unwrap_or(DEFAULT_ASSISTANT_PROMPT)
        .to_string()
}

pub fn set_assistant_prompt(store: &mut Store, prompt: &str) -> Result<(), String> {
    store.set(ASSISTANT_PROMPT_KEY, prompt.trim())
}

/// Write the built-in default back and return it.
pub fn restore_assistant_prompt(store: &mut Store) -> Result<String, String> {
    store.set(ASSISTANT_PROMPT_KEY, DEFAULT_ASSISTANT_PROMPT)?;
    Ok(DEFAULT_ASSISTANT_PROMPT.to_string())
}

/// Whether model names are tinted by tier in the UI. Default: false.
pub fn model_color_display(store: &Store) -> bool {
    store.get(MODEL_COLOR_KEY) == Some("true")
}

pub fn set_model_color_display(store: &mut Store, enabled: bool) -> Result<(), String> {
    store.set(MODEL_COLOR_KEY, if enabled { "true" } else { "false" })
}

/// Reasoning effort sent with the reasoning-capable model. Default: "medium".
pub fn reasoning_effort(store: &Store) -> String {
    store.get(REASONING_EFFORT_KEY).unwrap_or("medium").to_string()
}

pub fn set_reasoning_effort(store: &mut Store, effort: &str) -> Result<(), String> {
    match effort {
        "low" | "medium" | "high" => store.set(REASONING_EFFORT_KEY, effort),
        other => Err(format!("Invalid reasoning effort: {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = Store::open(dir.path().join("store.json"));
        (dir, store)
    }

    #[test]
    fn defaults_apply_when_unset() {
        let (_dir, store) = temp_store();
        assert!(!dark_mode(&store));
        assert_eq!(sidebar_position(&store), "right");
        assert_eq!(assistant_prompt(&store), DEFAULT_ASSISTANT_PROMPT);
        assert!(!model_color_display(&store));
        assert_eq!(reasoning_effort(&store), "medium");
    }

    #[test]
    fn assistant_prompt_override_and_restore() {
        let (_dir, mut store) = temp_store();
        set_assistant_prompt(&mut store, "  custom persona  ").unwrap();
        assert_eq!(assistant_prompt(&store), "custom persona");

        let restored = restore_assistant_prompt(&mut store).unwrap();
        assert_eq!(restored, DEFAULT_ASSISTANT_PROMPT);
        assert_eq!(assistant_prompt(&store), DEFAULT_ASSISTANT_PROMPT);
    }

    #[test]
    fn invalid_enum_values_are_rejected() {
        let (_dir, mut store) = temp_store();
        assert!(set_sidebar_position(&mut store, "top").is_err());
        assert!(set_reasoning_effort(&mut store, "extreme").is_err());
        assert_eq!(sidebar_position(&store), "right");
        assert_eq!(reasoning_effort(&store), "medium");
    }
}
