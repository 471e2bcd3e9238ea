//! Analyzer chat session: transcript + responder + one-request admission gate.
//!
//! At most one reply is in flight. A failed or timed-out reply becomes
//! [`FALLBACK_REPLY`]; the gate is released either way. Each exchange runs on its own
//! task, so a dropped caller still gets its model turn appended.
//!
//! The responder only sees `context`: user/model pairs that actually succeeded. The
//! greeting and fallback turns are shown in the transcript but never sent upstream.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{RwLock, Semaphore};

use crate::error::ResponderError;
use crate::responder::Responder;
use crate::transcript::{ChatMessage, ChatTranscript};

pub const FALLBACK_REPLY: &str =
    "I encountered an error while processing your request. Please try again.";

/// Result of one submission from the chat panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank text: nothing appended, no request made.
    Ignored,
    /// A reply is still pending: nothing appended, no request made.
    Busy,
    /// The responder answer (or the fallback) that was appended.
    Replied(String),
}

struct SessionState {
    transcript: RwLock<ChatTranscript>,
    context: RwLock<Vec<ChatMessage>>,
    responder: Arc<dyn Responder>,
    reply_timeout: Duration,
}

impl SessionState {
    async fn try_reply(&self, prior: &[ChatMessage], text: &str) -> Result<String, ResponderError> {
        match tokio::time::timeout(self.reply_timeout, self.responder.complete(prior, text)).await {
            Ok(result) => result,
            Err(_) => Err(ResponderError::Timeout(self.reply_timeout)),
        }
    }

    fn fallback(&self, e: &ResponderError) -> String {
        tracing::warn!(
            responder = self.responder.name(),
            error = %e,
            "[RELAB CHAT] reply failed; using fallback"
        );
        FALLBACK_REPLY.to_string()
    }

    /// Append user, ask, append model. Only a successful pair extends the context.
    async fn exchange(&self, text: String) -> String {
        let prior = self.context.read().await.clone();
        self.transcript.write().await.append_user(&text);

        let reply = match self.try_reply(&prior, &text).await {
            Ok(reply) => {
                let mut context = self.context.write().await;
                context.push(ChatMessage::user(text.as_str()));
                context.push(ChatMessage::model(reply.as_str()));
                reply
            }
            Err(e) => self.fallback(&e),
        };
        self.transcript.write().await.append_model(reply.clone());
        reply
    }
}

pub struct ChatSession {
    state: Arc<SessionState>,
    gate: Arc<Semaphore>,
}

impl ChatSession {
    pub fn new(responder: Arc<dyn Responder>, reply_timeout: Duration) -> Self {
        Self::with_transcript(responder, reply_timeout, ChatTranscript::with_greeting())
    }

    /// Seed the visible transcript. The responder context always starts empty.
    pub fn with_transcript(
        responder: Arc<dyn Responder>,
        reply_timeout: Duration,
        transcript: ChatTranscript,
    ) -> Self {
        Self {
            state: Arc::new(SessionState {
                transcript: RwLock::new(transcript),
                context: RwLock::new(Vec::new()),
                responder,
                reply_timeout,
            }),
            gate: Arc::new(Semaphore::new(1)),
        }
    }

    /// True while a reply is pending (the panel's typing indicator).
    pub fn is_typing(&self) -> bool {
        self.gate.available_permits() == 0
    }

    pub async fn transcript(&self) -> Vec<ChatMessage> {
        self.state.transcript.read().await.messages().to_vec()
    }

    /// Turns the responder will receive as context on the next submission.
    pub async fn context(&self) -> Vec<ChatMessage> {
        self.state.context.read().await.clone()
    }

    pub fn responder_name(&self) -> &str {
        self.state.responder.name()
    }

    /// Ask the responder for a reply to `text` given `prior` turns.
    /// Errors and timeouts are logged and replaced by [`FALLBACK_REPLY`].
    pub async fn request_reply(&self, prior: &[ChatMessage], text: &str) -> String {
        match self.state.try_reply(prior, text).await {
            Ok(reply) => reply,
            Err(e) => self.state.fallback(&e),
        }
    }

    /// Full exchange: validate, take the gate, then append user turn, await reply and
    /// append model turn on a spawned task that owns the permit.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let text = text.trim();
        if text.is_empty() {
            return SubmitOutcome::Ignored;
        }
        let Ok(permit) = Arc::clone(&self.gate).try_acquire_owned() else {
            tracing::debug!("[RELAB CHAT] submission rejected: reply pending");
            return SubmitOutcome::Busy;
        };

        let state = Arc::clone(&self.state);
        let text = text.to_string();
        let exchange = tokio::spawn(async move {
            let reply = state.exchange(text).await;
            drop(permit);
            reply
        });

        match exchange.await {
            Ok(reply) => SubmitOutcome::Replied(reply),
            Err(e) => {
                tracing::error!(error = %e, "[RELAB CHAT] exchange task failed");
                self.state
                    .transcript
                    .write()
                    .await
                    .append_model(FALLBACK_REPLY);
                SubmitOutcome::Replied(FALLBACK_REPLY.to_string())
            }
        }
    }
}
