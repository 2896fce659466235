use thiserror::Error;

use crate::models::DocumentKind;

#[derive(Error, Debug)]
pub enum Error {
    #[error("LLM API error: {0}")]
    LLMApi(String),

    #[error("Rate limit exceeded, retry after {0} seconds")]
    RateLimited(u64),

    #[error("LLM server error (HTTP {0})")]
    ServerError(u16),

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Response is missing the <{0}> section")]
    MissingTag(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Unsupported file type: {0} (expected .txt, .md or .pdf)")]
    UnsupportedFileType(String),

    #[error("The {0} is empty")]
    EmptyDocument(DocumentKind),

    #[error("The {0} is required")]
    MissingDocument(DocumentKind),

    #[error("No analysis available, generate a report first")]
    NoAnalysis,

    #[error("Session was restored from a saved analysis; job description and company information are not loaded")]
    DocumentsNotLoaded,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::RateLimited(_) | Error::ServerError(_) => true,
            Error::Network(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(Error::RateLimited(5).is_retryable());
        assert!(Error::ServerError(503).is_retryable());
        assert!(!Error::MissingTag("score".to_string()).is_retryable());
        assert!(!Error::LLMApi("bad request".to_string()).is_retryable());
        assert!(!Error::NoAnalysis.is_retryable());
        assert!(!Error::DocumentsNotLoaded.is_retryable());
    }

    #[test]
    fn test_document_errors_name_the_document() {
        let err = Error::MissingDocument(DocumentKind::JobDescription);
        assert_eq!(err.to_string(), "The job description is required");
    }
}
