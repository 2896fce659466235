use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Resume,
    JobDescription,
    CompanyInfo,
}

impl DocumentKind {
    /// Tag the document is wrapped in inside the analysis prompt.
    pub fn tag(&self) -> &'static str {
        match self {
            DocumentKind::Resume => "resume",
            DocumentKind::JobDescription => "job_description",
            DocumentKind::CompanyInfo => "company_info",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::Resume => write!(f, "resume"),
            DocumentKind::JobDescription => write!(f, "job description"),
            DocumentKind::CompanyInfo => write!(f, "company information"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub kind: DocumentKind,
    pub source: Option<PathBuf>,
    pub content: String,
}

impl Document {
    pub fn from_text(kind: DocumentKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            source: None,
            content: content.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    pub fn source_label(&self) -> String {
        self.source
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<inline>".to_string())
    }
}

/// The resume, job description and company background compared in one
/// session.
#[derive(Debug, Clone)]
pub struct DocumentSet {
    pub resume: Document,
    pub job_description: Document,
    pub company_info: Document,
}

impl DocumentSet {
    pub fn new(resume: Document, job_description: Document, company_info: Document) -> Result<Self> {
        let slots = [
            (DocumentKind::Resume, &resume),
            (DocumentKind::JobDescription, &job_description),
            (DocumentKind::CompanyInfo, &company_info),
        ];

        for (expected, document) in slots {
            if document.kind != expected || document.is_blank() {
                return Err(Error::MissingDocument(expected));
            }
        }

        Ok(Self {
            resume,
            job_description,
            company_info,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        [&self.resume, &self.job_description, &self.company_info].into_iter()
    }

    pub fn total_chars(&self) -> usize {
        self.iter().map(|d| d.content.len()).sum()
    }
}
