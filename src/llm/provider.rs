use async_trait::async_trait;
use std::str::FromStr;
use std::sync::Arc;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::llm::claude::ClaudeProvider;
use crate::llm::gemini::GeminiProvider;

#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Sends `prompt` as a single user message and returns the reply text.
    async fn complete(&self, prompt: &str) -> Result<String>;
    fn name(&self) -> &str;
    fn model(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Anthropic,
    Gemini,
}

impl FromStr for ProviderKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "anthropic" | "claude" => Ok(ProviderKind::Anthropic),
            "gemini" | "google" => Ok(ProviderKind::Gemini),
            other => Err(Error::Config(format!(
                "Unknown LLM provider '{}' (expected anthropic or gemini)",
                other
            ))),
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderKind::Anthropic => write!(f, "anthropic"),
            ProviderKind::Gemini => write!(f, "gemini"),
        }
    }
}

pub fn build_provider(config: &Config) -> Result<Arc<dyn LLMProvider>> {
    let api_key = config.api_key()?.to_string();
    let model = config.model().map(str::to_string);

    let provider: Arc<dyn LLMProvider> = match config.provider {
        ProviderKind::Anthropic => Arc::new(ClaudeProvider::new(
            api_key,
            model,
            config.max_tokens,
            config.request_timeout,
        )?),
        ProviderKind::Gemini => Arc::new(GeminiProvider::new(
            api_key,
            model,
            config.max_tokens,
            config.request_timeout,
        )?),
    };

    tracing::debug!("Using {} provider with model {}", provider.name(), provider.model());
    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_aliases() {
        assert_eq!("Claude".parse::<ProviderKind>().unwrap(), ProviderKind::Anthropic);
        assert_eq!(" google ".parse::<ProviderKind>().unwrap(), ProviderKind::Gemini);
        assert!("openai".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn test_build_provider_uses_configured_model() {
        let config = Config::from_lookup(|key| match key {
            "LLM_PROVIDER" => Some("gemini".to_string()),
            "GEMINI_API_KEY" => Some("test-key".to_string()),
            "GEMINI_MODEL" => Some("gemini-1.5-flash".to_string()),
            _ => None,
        })
        .unwrap();

        let provider = build_provider(&config).unwrap();
        assert_eq!(provider.name(), "Gemini");
        assert_eq!(provider.model(), "gemini-1.5-flash");
    }

    #[test]
    fn test_build_provider_requires_key() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert!(matches!(build_provider(&config), Err(Error::Config(_))));
    }
}
