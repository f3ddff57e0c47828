use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String, // "user" or "assistant"
    pub content: String,
}

impl ChatMessage {
    pub fn assistant(content: &str) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.to_string(),
        }
    }

    pub fn user(content: &str) -> Self {
        Self {
            role: "user".to_string(),
            content: content.to_string(),
        }
    }
}

/// A fresh transcript: a single assistant message carrying the
/// configured persona prompt. Every website's message list starts here.
pub fn seed_transcript(assistant_prompt: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::assistant(assistant_prompt)]
}
