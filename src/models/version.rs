use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::models::ChatMessage;

/// An immutable snapshot of a website at one generation step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    pub id: i64,
    pub html: String,
    pub messages: Vec<ChatMessage>,
    pub prompt: String,
    pub timestamp: DateTime<Utc>,
    pub model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionListItem {
    pub id: i64,
    pub prompt: String,
    pub model: String,
    pub timestamp: DateTime<Utc>,
}

impl From<&Version> for VersionListItem {
    fn from(version: &Version) -> Self {
        Self {
            id: version.id,
            prompt: version.prompt.clone(),
            model: version.model.clone(),
            timestamp: version.timestamp,
        }
    }
}
