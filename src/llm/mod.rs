pub mod provider;
pub mod claude;
pub mod gemini;
pub mod prompts;
pub mod parser;
pub mod retry;
mod http;

pub use provider::{build_provider, LLMProvider, ProviderKind};
pub use claude::ClaudeProvider;
pub use gemini::GeminiProvider;
pub use prompts::{AnalysisRequest, OptimizationRequest};
pub use retry::RetryPolicy;
