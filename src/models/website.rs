use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::models::{ChatMessage, Version};

/// A generated website and its ordered version history.
///
/// `id`, `name` and `html` are deliberately non-defaulted: a persisted
/// entry missing any of them fails deserialization, which invalidates the
/// whole stored collection on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Website {
    pub id: i64,
    pub name: String,
    pub html: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    #[serde(default = "Utc::now")]
    pub last_updated: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default)]
    pub versions: Vec<Version>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteListItem {
    pub id: i64,
    pub name: String,
    pub model: Option<String>,
    pub version_count: usize,
    pub last_updated: DateTime<Utc>,
}

impl From<&Website> for WebsiteListItem {
    fn from(website: &Website) -> Self {
        Self {
            id: website.id,
            name: website.name.clone(),
            model: website.model.clone(),
            version_count: website.versions.len(),
            last_updated: website.last_updated,
        }
    }
}
