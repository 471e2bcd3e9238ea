//! Re-React Lab — core library.
//! Call-order hook cache, Icon Registry and the Logic Analyzer chat behind the lab gateway.

pub mod chat;
pub mod config;
pub mod error;
pub mod hook_lab;
pub mod hook_runtime;
mod icon_catalog;
pub mod icon_index;
pub mod responder;
pub mod transcript;

pub use chat::{ChatSession, SubmitOutcome, FALLBACK_REPLY};
pub use config::{LabConfig, LlmMode};
pub use error::{ConfigError, HookError, ResponderError};
pub use hook_lab::{HookLab, HookLabView};
pub use hook_runtime::{CallOrderCache, SlotSetter, SlotType, SlotUpdate, SlotValue};
pub use icon_index::{page_count, paginate, IconBrowser, IconEntry, IconIndex, IconPage, DEFAULT_PAGE_SIZE};
pub use responder::{MockResponder, OpenRouterResponder, Responder, ANALYZER_PROMPT};
pub use transcript::{ChatMessage, ChatTranscript, Role, ANALYZER_GREETING};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
