//! Chat transcript for the Logic Analyzer panel. Append-only, in order.

use serde::{Deserialize, Serialize};

/// Opening message shown before the user types anything.
pub const ANALYZER_GREETING: &str = "Hi! I've analyzed your custom React polyfill code. \
It uses a singleton cache system for hooks and includes a massive emoji mapping. \
What would you like to know about it?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn model(content: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transcript opened by the analyzer's greeting.
    pub fn with_greeting() -> Self {
        Self {
            messages: vec![ChatMessage::model(ANALYZER_GREETING)],
        }
    }

    /// Appends the trimmed text as a user turn. Blank input is dropped; returns
    /// whether a message was appended.
    pub fn append_user(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.messages.push(ChatMessage::user(text));
        true
    }

    pub fn append_model(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::model(text));
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
