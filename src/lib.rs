pub mod config;
pub mod error;
pub mod models;
pub mod documents;
pub mod llm;
pub mod analysis;
pub mod output;

pub use config::Config;
pub use error::{Error, Result};
pub use documents::DocumentLoader;
pub use llm::{build_provider, ClaudeProvider, GeminiProvider, LLMProvider, ProviderKind, RetryPolicy};
pub use analysis::{EnhancementSession, ResumeEnhancer};
pub use output::OutputFormat;
