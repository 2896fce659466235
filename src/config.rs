use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::llm::ProviderKind;

pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_MAX_RETRIES: u32 = 3;

#[derive(Debug, Clone)]
pub struct Config {
    pub provider: ProviderKind,
    pub anthropic_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
    pub anthropic_model: Option<String>,
    pub gemini_model: Option<String>,
    pub max_tokens: Option<u32>,
    pub request_timeout: Duration,
    pub max_retries: u32,
    pub output_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key/value source. `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let provider = match non_empty("LLM_PROVIDER") {
            Some(value) => value.parse()?,
            None => ProviderKind::Anthropic,
        };

        let max_tokens = non_empty("LLM_MAX_TOKENS").and_then(|v| v.parse().ok());

        let request_timeout = non_empty("LLM_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let max_retries = non_empty("LLM_MAX_RETRIES")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_RETRIES);

        let output_dir = non_empty("OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            provider,
            anthropic_api_key: non_empty("ANTHROPIC_API_KEY"),
            gemini_api_key: non_empty("GEMINI_API_KEY"),
            anthropic_model: non_empty("ANTHROPIC_MODEL"),
            gemini_model: non_empty("GEMINI_MODEL"),
            max_tokens,
            request_timeout,
            max_retries,
            output_dir,
        })
    }

    /// API key for the selected provider.
    pub fn api_key(&self) -> Result<&str> {
        let (key, var) = match self.provider {
            ProviderKind::Anthropic => (&self.anthropic_api_key, "ANTHROPIC_API_KEY"),
            ProviderKind::Gemini => (&self.gemini_api_key, "GEMINI_API_KEY"),
        };
        key.as_deref()
            .ok_or_else(|| Error::Config(format!("{} environment variable not set", var)))
    }

    pub fn model(&self) -> Option<&str> {
        match self.provider {
            ProviderKind::Anthropic => self.anthropic_model.as_deref(),
            ProviderKind::Gemini => self.gemini_model.as_deref(),
        }
    }

    /// Overrides the model of the currently selected provider.
    pub fn set_model(&mut self, model: String) {
        match self.provider {
            ProviderKind::Anthropic => self.anthropic_model = Some(model),
            ProviderKind::Gemini => self.gemini_model = Some(model),
        }
    }
}
