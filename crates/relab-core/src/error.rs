//! Error types for the Re-React Lab core.

use std::time::Duration;

use thiserror::Error;

/// Errors raised by the call-order hook cache.
///
/// Order misalignment between slots of the same kind is silent; only a read that
/// lands on a slot of a different kind can be detected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HookError {
    #[error("slot {slot} holds {found}, registration expected {expected}")]
    SlotTypeMismatch {
        slot: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error("slot {slot} was never registered")]
    UnknownSlot { slot: usize },
}

/// Errors from an external responder. Never surfaced past `ChatSession`.
#[derive(Error, Debug)]
pub enum ResponderError {
    #[error("responder request: {0}")]
    Http(#[from] reqwest::Error),

    #[error("responder provider {0}: {1}")]
    Provider(u16, String),

    #[error("responder response parse: {0}")]
    Json(String),

    #[error("responder returned no reply")]
    EmptyReply,

    #[error("no API key configured for the responder")]
    MissingApiKey,

    #[error("responder timed out after {0:?}")]
    Timeout(Duration),
}

/// Configuration load failure.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config: {0}")]
    Load(#[from] config::ConfigError),

    #[error("config value {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
