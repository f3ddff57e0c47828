use chrono::Utc;
use log::info;
use serde::Serialize;

use crate::models::{seed_transcript, ChatMessage, Version, VersionListItem, Website, WebsiteListItem};
use crate::services::settings_service;
use crate::services::store_service::{
    self, Store, CURRENT_VERSION_KEY, CURRENT_WEBSITE_KEY,
};

pub const IMPORT_PROMPT: &str = "Imported HTML file";
pub const IMPORTED_MODEL: &str = "imported";

/// What the frontend needs after any state transition: pointers, the
/// active name/prompt, and the html to render (empty string means show
/// the empty state).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentView {
    pub website_index: usize,
    pub version_index: Option<usize>,
    pub name: String,
    pub prompt: String,
    pub html: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_websites: usize,
    pub total_versions: usize,
}

/// The whole mutable application state: the website collection, the two
/// current pointers, and the running chat transcript. All mutations go
/// through here and persist to the store before returning.
pub struct Studio {
    store: Store,
    websites: Vec<Website>,
    current_website: Option<usize>,
    current_version: Option<usize>,
    chat: Vec<ChatMessage>,
}

impl Studio {
    /// Load persisted state, revalidate the pointers against it, and make
    /// sure the collection is never empty.
    pub fn bootstrap(mut store: Store) -> Result<Self, String> {
        let websites = store_service::load_collection(&mut store);

        let mut studio = Self {
            store,
            websites,
            current_website: None,
            current_version: None,
            chat: Vec::new(),
        };

        if studio.websites.is_empty() {
            studio.create_website()?;
        } else {
            let last = studio.websites.len() - 1;
            let website_index = store_service::load_index(&studio.store, CURRENT_WEBSITE_KEY)
                .unwrap_or(0)
                .min(last);
            // Read before switching: switch_to_website persists its own
            // version pointer.
            let saved_version = store_service::load_index(&studio.store, CURRENT_VERSION_KEY);
            studio.switch_to_website(website_index)?;

            // Restore the persisted version pointer when it is still valid
            // for the restored website.
            if let Some(version_index) = saved_version {
                if version_index < studio.websites[website_index].versions.len() {
                    studio.switch_to_version(version_index)?;
                }
            }
        }

        info!("Loaded {} website(s) from store", studio.websites.len());
        Ok(studio)
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    pub fn website_at(&self, index: usize) -> Option<&Website> {
        self.websites.get(index)
    }

    pub fn list_websites(&self) -> Vec<WebsiteListItem> {
        self.websites.iter().map(WebsiteListItem::from).collect()
    }

    pub fn current_versions(&self) -> Option<&[Version]> {
        self.current().map(|w| w.versions.as_slice())
    }

    pub fn list_versions(&self) -> Vec<VersionListItem> {
        self.current()
            .map(|w| w.versions.iter().map(VersionListItem::from).collect())
            .unwrap_or_default()
    }

    pub fn stats(&self) -> Stats {
        Stats {
            total_websites: self.websites.len(),
            total_versions: self.current().map_or(0, |w| w.versions.len()),
        }
    }

    fn current(&self) -> Option<&Website> {
        self.current_website.and_then(|i| self.websites.get(i))
    }

    fn seed(&self) -> Vec<ChatMessage> {
        seed_transcript(&settings_service::assistant_prompt(&self.store))
    }

    fn persist(&mut self) -> Result<(), String> {
        store_service::save_collection(&mut self.store, &self.websites)?;
        store_service::save_index(&mut self.store, CURRENT_WEBSITE_KEY, self.current_website)?;
        store_service::save_index(&mut self.store, CURRENT_VERSION_KEY, self.current_version)
    }

    /// The active html/prompt come from the selected version when one is
    /// current, otherwise from the website itself.
    pub fn view(&self) -> Result<CurrentView, String> {
        let website_index = self.current_website.ok_or("No current website")?;
        let website = self
            .websites
            .get(website_index)
            .ok_or("Current website pointer out of bounds")?;

        let (html, prompt) = match self.current_version.and_then(|i| website.versions.get(i)) {
            Some(version) => (version.html.clone(), version.prompt.clone()),
            None => (website.html.clone(), website.prompt.clone()),
        };

        Ok(CurrentView {
            website_index,
            version_index: self.current_version,
            name: website.name.clone(),
            prompt,
            html,
        })
    }

    pub fn create_website(&mut self) -> Result<CurrentView, String> {
        self.chat = self.seed();

        let website = Website {
            id: Utc::now().timestamp_millis(),
            name: format!("Website {}", self.websites.len() + 1),
            html: String::new(),
            prompt: String::new(),
            messages: self.chat.clone(),
            last_updated: Utc::now(),
            model: None,
            versions: Vec::new(),
        };

        self.websites.push(website);
        self.current_website = Some(self.websites.len() - 1);
        self.current_version = None;

        self.persist()?;
        self.view()
    }

    /// No-op when the index is out of bounds; otherwise moves both
    /// pointers, reloads the chat transcript (reseeding when the website
    /// has no versions yet) and returns the html to show.
    pub fn switch_to_website(&mut self, index: usize) -> Result<CurrentView, String> {
        if index >= self.websites.len() {
            return self.view();
        }

        self.current_website = Some(index);
        let website = &self.websites[index];
        self.current_version = website.versions.len().checked_sub(1);

        self.chat = if website.versions.is_empty() {
            self.seed()
        } else {
            website.messages.clone()
        };

        self.persist()?;
        self.view()
    }

    /// Load one version's snapshot without mutating the version list.
    pub fn switch_to_version(&mut self, index: usize) -> Result<CurrentView, String> {
        let website_index = self.current_website.ok_or("No current website")?;
        if index >= self.websites[website_index].versions.len() {
            return self.view();
        }

        self.chat = self.websites[website_index].versions[index].messages.clone();
        self.current_version = Some(index);

        self.persist()?;
        self.view()
    }

    /// First half of a generation turn: append the user message to the
    /// transcript and remember the raw prompt on the website. Nothing is
    /// persisted until the response arrives; a failed request leaves the
    /// stored state untouched.
    pub fn begin_generation(&mut self, prompt: &str) -> Result<Vec<ChatMessage>, String> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err("Prompt is empty".to_string());
        }

        let website_index = self.current_website.ok_or("No current website")?;

        if self.chat.is_empty() {
            self.chat = self.seed();
        }
        self.chat.push(ChatMessage::user(prompt));

        let website = &mut self.websites[website_index];
        website.prompt = prompt.to_string();
        website.messages = self.chat.clone();

        Ok(self.chat.clone())
    }

    /// Second half of a generation turn: record the assistant response as
    /// a new version and advance the version pointer to it.
    pub fn record_generation(&mut self, model: &str, result_html: &str) -> Result<CurrentView, String> {
        let website_index = self.current_website.ok_or("No current website")?;

        self.chat.push(ChatMessage::assistant(result_html));

        let website = &mut self.websites[website_index];
        website.versions.push(Version {
            id: Utc::now().timestamp_millis(),
            html: result_html.to_string(),
            messages: self.chat.clone(),
            prompt: website.prompt.clone(),
            timestamp: Utc::now(),
            model: model.to_string(),
        });
        self.current_version = Some(website.versions.len() - 1);

        website.html = result_html.to_string();
        website.messages = self.chat.clone();
        website.last_updated = Utc::now();
        website.model = Some(model.to_string());

        // First real response: derive a short display name from the prompt
        // if the auto-generated default is still in place.
        if website.name == format!("Website {}", website_index + 1) && website.messages.len() == 3 {
            let short: Vec<&str> = website.prompt.split_whitespace().take(3).collect();
            website.name = format!("{}...", short.join(" "));
        }

        self.persist()?;
        self.view()
    }

    /// Removing the last website always creates a fresh one: the
    /// collection is never left empty.
    pub fn delete_website(&mut self, index: usize) -> Result<CurrentView, String> {
        if index >= self.websites.len() {
            return self.view();
        }

        self.websites.remove(index);

        if self.websites.is_empty() {
            return self.create_website();
        }

        let current = self
            .current_website
            .unwrap_or(0)
            .min(self.websites.len() - 1);
        self.switch_to_website(current)
    }

    pub fn delete_version(&mut self, index: usize) -> Result<CurrentView, String> {
        let website_index = self.current_website.ok_or("No current website")?;
        if index >= self.websites[website_index].versions.len() {
            return self.view();
        }

        self.websites[website_index].versions.remove(index);

        if Some(index) == self.current_version {
            if self.websites[website_index].versions.is_empty() {
                // No versions left: back to the empty, freshly seeded state.
                let seed = self.seed();
                self.current_version = None;
                let website = &mut self.websites[website_index];
                website.html = String::new();
                website.prompt = String::new();
                website.messages = seed.clone();
                self.chat = seed;
            } else {
                // Jump to the new latest version and load its snapshot.
                let last = self.websites[website_index].versions.len() - 1;
                self.current_version = Some(last);
                let latest = self.websites[website_index].versions[last].clone();
                let website = &mut self.websites[website_index];
                website.html = latest.html;
                website.messages = latest.messages;
                self.chat = website.messages.clone();
            }
        } else if let Some(current) = self.current_version {
            if index < current {
                // Keep the pointer on the same logical version.
                self.current_version = Some(current - 1);
            }
        }

        self.persist()?;
        self.view()
    }

    /// Deep copy with a fresh id; pointers stay where they are.
    pub fn duplicate_website(&mut self, index: usize) -> Result<WebsiteListItem, String> {
        let source = self
            .websites
            .get(index)
            .ok_or_else(|| format!("No website at index {}", index))?;

        let mut copy = source.clone();
        copy.id = Utc::now().timestamp_millis();
        copy.name = format!("{} (Copy)", source.name);
        copy.last_updated = Utc::now();

        self.websites.push(copy);
        self.persist()?;
        Ok(WebsiteListItem::from(self.websites.last().unwrap()))
    }

    pub fn rename_website(&mut self, index: usize, name: &str) -> Result<(), String> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(());
        }

        let website = self
            .websites
            .get_mut(index)
            .ok_or_else(|| format!("No website at index {}", index))?;
        website.name = name.to_string();
        self.persist()
    }

    /// Create a website whose sole version is the imported content and
    /// make it current.
    pub fn import_website(&mut self, raw_html: &str, source_name: &str) -> Result<CurrentView, String> {
        let seed = self.seed();
        let now = Utc::now();

        let website = Website {
            id: now.timestamp_millis(),
            name: format!("Imported {}", source_name),
            html: raw_html.to_string(),
            prompt: IMPORT_PROMPT.to_string(),
            messages: seed.clone(),
            last_updated: now,
            model: None,
            versions: vec![Version {
                id: now.timestamp_millis(),
                html: raw_html.to_string(),
                messages: seed.clone(),
                prompt: IMPORT_PROMPT.to_string(),
                timestamp: now,
                model: IMPORTED_MODEL.to_string(),
            }],
        };

        self.websites.push(website);
        self.current_website = Some(self.websites.len() - 1);
        self.current_version = Some(0);
        self.chat = seed;

        self.persist()?;
        self.view()
    }

    /// Drop every version of the current website; its html is kept.
    pub fn clear_versions(&mut self) -> Result<CurrentView, String> {
        let website_index = self.current_website.ok_or("No current website")?;
        self.websites[website_index].versions.clear();
        self.current_version = None;

        self.persist()?;
        self.view()
    }
}
