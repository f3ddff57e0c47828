use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use log::{error, warn};

use crate::models::Website;

pub const WEBSITES_KEY: &str = "websites";
pub const CURRENT_WEBSITE_KEY: &str = "currentWebsiteIndex";
pub const CURRENT_VERSION_KEY: &str = "currentVersionIndex";

pub fn get_app_data_dir() -> Result<PathBuf, String> {
    let data_dir = dirs::data_dir()
        .ok_or("Could not find data directory")?
        .join("SiteForge");

    if !data_dir.exists() {
        fs::create_dir_all(&data_dir).map_err(|e| e.to_string())?;
    }

    Ok(data_dir)
}

/// Flat string-keyed store backed by a single JSON file.
///
/// Writes go through to disk immediately so a reload after any completed
/// operation observes consistent state. A corrupt backing file is logged
/// and replaced with an empty store rather than failing the caller.
pub struct Store {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl Store {
    pub fn open_default() -> Result<Self, String> {
        Ok(Self::open(get_app_data_dir()?.join("store.json")))
    }

    pub fn open(path: PathBuf) -> Self {
        let entries = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<BTreeMap<String, String>>(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    error!("Corrupt store file {:?}, starting empty: {}", path, e);
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };

        Self { path, entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn flush(&self) -> Result<(), String> {
        let content = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| format!("Failed to serialize store: {}", e))?;
        fs::write(&self.path, content).map_err(|e| format!("Failed to write store: {}", e))
    }
}

/// Load the website collection, validating its structure. Any entry
/// missing `id`, `name` or `html` fails the parse, and the whole stored
/// collection is reset to empty rather than partially filtered.
pub fn load_collection(store: &mut Store) -> Vec<Website> {
    let Some(raw) = store.get(WEBSITES_KEY) else {
        return Vec::new();
    };

    match serde_json::from_str::<Vec<Website>>(raw) {
        Ok(websites) => websites,
        Err(e) => {
            error!("Invalid website collection in store, resetting: {}", e);
            if let Err(e) = store.set(WEBSITES_KEY, "[]") {
                warn!("Failed to reset website collection: {}", e);
            }
            Vec::new()
        }
    }
}

pub fn save_collection(store: &mut Store, websites: &[Website]) -> Result<(), String> {
    let content = serde_json::to_string(websites)
        .map_err(|e| format!("Failed to serialize websites: {}", e))?;
    store.set(WEBSITES_KEY, &content)
}

/// Pointers persist as stringified integers, `-1` meaning "none".
pub fn load_index(store: &Store, key: &str) -> Option<usize> {
    let raw = store.get(key)?;
    match raw.trim().parse::<i64>() {
        Ok(value) if value >= 0 => Some(value as usize),
        _ => None,
    }
}

pub fn save_index(store: &mut Store, key: &str, index: Option<usize>) -> Result<(), String> {
    let stored = index.map_or(-1, |i| i as i64);
    store.set(key, &stored.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{seed_transcript, Website};
    use chrono::Utc;

    fn temp_store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = Store::open(dir.path().join("store.json"));
        (dir, store)
    }

    fn sample_website(name: &str) -> Website {
        Website {
            id: Utc::now().timestamp_millis(),
            name: name.to_string(),
            html: String::new(),
            prompt: String::new(),
            messages: seed_transcript("seed"),
            last_updated: Utc::now(),
            model: None,
            versions: Vec::new(),
        }
    }

    #[test]
    fn get_set_round_trip_through_reopen() {
        let (dir, mut store) = temp_store();
        store.set("darkMode", "enabled").unwrap();

        let reopened = Store::open(dir.path().join("store.json"));
        assert_eq!(reopened.get("darkMode"), Some("enabled"));
        assert_eq!(reopened.get("missing"), None);
    }

    #[test]
    fn collection_round_trips_when_valid() {
        let (_dir, mut store) = temp_store();
        let websites = vec![sample_website("Website 1"), sample_website("Website 2")];
        save_collection(&mut store, &websites).unwrap();

        let loaded = load_collection(&mut store);
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].name, "Website 1");
        assert_eq!(loaded[1].messages, websites[1].messages);
    }

    #[test]
    fn invalid_entry_resets_whole_collection() {
        let (_dir, mut store) = temp_store();
        // Second entry is missing `html`, so the whole collection is invalid.
        store
            .set(
                WEBSITES_KEY,
                r#"[{"id":1,"name":"ok","html":""},{"id":2,"name":"bad"}]"#,
            )
            .unwrap();

        assert!(load_collection(&mut store).is_empty());
        assert_eq!(store.get(WEBSITES_KEY), Some("[]"));
    }

    #[test]
    fn unparseable_collection_resets_to_empty() {
        let (_dir, mut store) = temp_store();
        store.set(WEBSITES_KEY, "not json").unwrap();

        assert!(load_collection(&mut store).is_empty());
        assert_eq!(store.get(WEBSITES_KEY), Some("[]"));
    }

    #[test]
    fn indices_use_minus_one_for_none() {
        let (_dir, mut store) = temp_store();
        save_index(&mut store, CURRENT_VERSION_KEY, None).unwrap();
        assert_eq!(store.get(CURRENT_VERSION_KEY), Some("-1"));
        assert_eq!(load_index(&store, CURRENT_VERSION_KEY), None);

        save_index(&mut store, CURRENT_WEBSITE_KEY, Some(3)).unwrap();
        assert_eq!(load_index(&store, CURRENT_WEBSITE_KEY), Some(3));
    }
}
