//! Responder bridge: relays analyzer chat turns to an external text-completion model.
//!
//! `OpenRouterResponder` speaks the OpenAI-compatible chat completions protocol (OpenRouter
//! by default). `MockResponder` answers offline for `llm_mode = "mock"` and tests.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::LabConfig;
use crate::error::ResponderError;
use crate::transcript::{ChatMessage, Role};

pub const DEFAULT_API_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "google/gemini-2.0-flash-001";

/// Fixed system instruction for the Logic Analyzer.
pub const ANALYZER_PROMPT: &str = "You are the Logic Analyzer for Re-React Lab, a teaching tool built around \
a custom React hooks polyfill. The polyfill keeps hook state in a single cache keyed only by call order: \
each render resets a hook index to zero and every useState call takes the next index. \
Explain clearly why hooks must be called in the same order on every render, what goes wrong when a hook is \
skipped or called conditionally, and how the emoji icon registry is searched and paginated. \
Be concise and concrete. Use short code snippets only when they help.";

/// External text-completion service: one operation, `complete`.
#[async_trait]
pub trait Responder: Send + Sync {
    /// `prior` is the conversation so far (excluding `text`).
    async fn complete(&self, prior: &[ChatMessage], text: &str) -> Result<String, ResponderError>;

    fn name(&self) -> &str;
}

#[derive(Debug, Serialize)]
struct WireMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Option<Vec<CompletionChoice>>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: Option<CompletionMessage>,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

fn build_messages(system: &str, prior: &[ChatMessage], text: &str) -> Vec<WireMessage> {
    let mut messages = Vec::with_capacity(prior.len() + 2);
    messages.push(WireMessage {
        role: "system",
        content: system.to_string(),
    });
    messages.extend(prior.iter().map(|m| WireMessage {
        role: match m.role {
            Role::User => "user",
            Role::Model => "assistant",
        },
        content: m.content.clone(),
    }));
    messages.push(WireMessage {
        role: "user",
        content: text.to_string(),
    });
    messages
}

fn parse_reply(body: &str) -> Result<String, ResponderError> {
    let parsed: CompletionResponse =
        serde_json::from_str(body).map_err(|e| ResponderError::Json(e.to_string()))?;
    parsed
        .choices
        .and_then(|c| c.into_iter().next())
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .filter(|s| !s.trim().is_empty())
        .ok_or(ResponderError::EmptyReply)
}

/// OpenAI-compatible chat completions client.
pub struct OpenRouterResponder {
    api_key: String,
    api_url: String,
    model: String,
    system_instruction: String,
    client: reqwest::Client,
}

impl OpenRouterResponder {
    pub fn new(api_key: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            api_key: api_key.trim().to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            system_instruction: ANALYZER_PROMPT.to_string(),
            client,
        }
    }

    /// Build from config; the key comes from the environment (see [`LabConfig::api_key`]).
    pub fn from_config(config: &LabConfig) -> Result<Self, ResponderError> {
        let key = config.api_key().ok_or(ResponderError::MissingApiKey)?;
        Ok(Self::new(&key)
            .with_api_url(&config.llm_api_url)
            .with_model(&config.llm_model))
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = api_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_system_instruction(mut self, instruction: &str) -> Self {
        self.system_instruction = instruction.to_string();
        self
    }
}

#[async_trait]
impl Responder for OpenRouterResponder {
    async fn complete(&self, prior: &[ChatMessage], text: &str) -> Result<String, ResponderError> {
        let url = format!("{}/chat/completions", self.api_url);
        let body = CompletionRequest {
            model: &self.model,
            messages: build_messages(&self.system_instruction, prior, text),
            temperature: Some(0.4),
        };

        tracing::info!(
            model = %self.model,
            turns = prior.len(),
            "[RELAB CHAT] requesting analyzer reply"
        );

        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("X-Title", "Re-React Lab")
            .json(&body)
            .send()
            .await?;

        let status = res.status();
        let raw = res.text().await?;
        if !status.is_success() {
            return Err(ResponderError::Provider(status.as_u16(), raw));
        }
        parse_reply(&raw)
    }

    fn name(&self) -> &str {
        "openrouter"
    }
}

/// Offline responder with canned, topic-aware answers.
#[derive(Debug, Clone, Default)]
pub struct MockResponder;

#[async_trait]
impl Responder for MockResponder {
    async fn complete(&self, prior: &[ChatMessage], text: &str) -> Result<String, ResponderError> {
        let lower = text.to_lowercase();
        let reply = if ["hook", "cache", "slot", "state", "order"]
            .iter()
            .any(|k| lower.contains(k))
        {
            "Each render resets the hook index to zero, and every useState call claims the next slot. \
The cache has no keys, so skipping or reordering a hook makes every later hook read the wrong slot."
                .to_string()
        } else if ["icon", "emoji", "page", "search"]
            .iter()
            .any(|k| lower.contains(k))
        {
            "The icon registry filters keys by case-insensitive substring and shows 60 icons per page."
                .to_string()
        } else {
            format!(
                "(mock analyzer, turn {}) You asked: {}",
                prior.len() / 2 + 1,
                text.trim()
            )
        };
        Ok(reply)
    }

    fn name(&self) -> &str {
        "mock"
    }
}
