//! Lab configuration: defaults, then an optional TOML file, then `RELAB__*` environment.
//!
//! | Key | Default | Env |
//! |-----|---------|-----|
//! | app_name | Re-React Lab | RELAB__APP_NAME |
//! | host | 127.0.0.1 | RELAB__HOST |
//! | port | 3001 | RELAB__PORT |
//! | llm_mode | mock | RELAB__LLM_MODE ("mock" \| "openrouter") |
//! | llm_api_url | https://openrouter.ai/api/v1 | RELAB__LLM_API_URL |
//! | llm_model | google/gemini-2.0-flash-001 | RELAB__LLM_MODEL |
//! | reply_timeout_secs | 30 | RELAB__REPLY_TIMEOUT_SECS |
//! | icon_page_size | 60 | RELAB__ICON_PAGE_SIZE |
//!
//! The file path comes from `RELAB_CONFIG` (default `config/relab`, extension optional).
//! The API key is never read from the file: `RELAB_LLM_API_KEY`, then `OPENROUTER_API_KEY`.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::icon_index::DEFAULT_PAGE_SIZE;
use crate::responder::{DEFAULT_API_URL, DEFAULT_MODEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmMode {
    Mock,
    OpenRouter,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabConfig {
    pub app_name: String,
    pub host: String,
    pub port: u16,
    pub llm_mode: LlmMode,
    pub llm_api_url: String,
    pub llm_model: String,
    pub reply_timeout_secs: u64,
    pub icon_page_size: usize,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            app_name: "Re-React Lab".to_string(),
            host: "127.0.0.1".to_string(),
            port: 3001,
            llm_mode: LlmMode::Mock,
            llm_api_url: DEFAULT_API_URL.to_string(),
            llm_model: DEFAULT_MODEL.to_string(),
            reply_timeout_secs: 30,
            icon_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl LabConfig {
    /// Load from `RELAB_CONFIG` (or `config/relab`) and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("RELAB_CONFIG").unwrap_or_else(|_| "config/relab".to_string());
        Self::load_from(Path::new(&path))
    }

    /// Load with an explicit file path. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let defaults = LabConfig::default();
        let builder = config::Config::builder()
            .set_default("app_name", defaults.app_name)?
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("llm_mode", "mock")?
            .set_default("llm_api_url", defaults.llm_api_url)?
            .set_default("llm_model", defaults.llm_model)?
            .set_default("reply_timeout_secs", defaults.reply_timeout_secs as i64)?
            .set_default("icon_page_size", defaults.icon_page_size as i64)?;

        let built = builder
            .add_source(config::File::from(path).required(false))
            .add_source(config::Environment::with_prefix("RELAB").separator("__"))
            .build()?;

        let cfg: LabConfig = built.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.reply_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "reply_timeout_secs",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.icon_page_size == 0 {
            return Err(ConfigError::Invalid {
                field: "icon_page_size",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn reply_timeout(&self) -> Duration {
        Duration::from_secs(self.reply_timeout_secs)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Priority: RELAB_LLM_API_KEY > OPENROUTER_API_KEY. Blank values count as unset.
    pub fn api_key(&self) -> Option<String> {
        std::env::var("RELAB_LLM_API_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| std::env::var("OPENROUTER_API_KEY").ok())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let cfg = LabConfig::load_from(Path::new("does/not/exist/relab")).unwrap();
        assert_eq!(cfg.app_name, "Re-React Lab");
        assert_eq!(cfg.llm_mode, LlmMode::Mock);
        assert_eq!(cfg.icon_page_size, 60);
        assert_eq!(cfg.reply_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn llm_mode_names() {
        let mode: LlmMode = serde_json::from_str("\"openrouter\"").unwrap();
        assert_eq!(mode, LlmMode::OpenRouter);
    }
}
