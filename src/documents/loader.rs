use std::path::Path;
use tokio::fs;

use crate::documents::FileType;
use crate::error::{Error, Result};
use crate::models::{Document, DocumentKind, DocumentSet};

/// Reads resumes, job descriptions and company background from disk.
#[derive(Debug, Default, Clone)]
pub struct DocumentLoader;

impl DocumentLoader {
    pub fn new() -> Self {
        Self
    }

    pub async fn load(&self, kind: DocumentKind, path: &Path) -> Result<Document> {
        let raw = match FileType::from_path(path) {
            FileType::Pdf => self.read_pdf(path).await?,
            FileType::Text | FileType::Markdown => fs::read_to_string(path).await?,
            FileType::Unknown => {
                return Err(Error::UnsupportedFileType(path.display().to_string()));
            }
        };

        let content = normalize(&raw);
        if content.is_empty() {
            return Err(Error::EmptyDocument(kind));
        }

        tracing::debug!(
            "Loaded {} from {} ({} chars)",
            kind,
            path.display(),
            content.len()
        );

        Ok(Document {
            kind,
            source: Some(path.to_path_buf()),
            content,
        })
    }

    pub async fn load_set(
        &self,
        resume: &Path,
        job_description: &Path,
        company_info: &Path,
    ) -> Result<DocumentSet> {
        let resume = self.load(DocumentKind::Resume, resume).await?;
        let job_description = self.load(DocumentKind::JobDescription, job_description).await?;
        let company_info = self.load(DocumentKind::CompanyInfo, company_info).await?;
        DocumentSet::new(resume, job_description, company_info)
    }

    async fn read_pdf(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            Error::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

/// Unifies line endings, strips trailing spaces and collapses runs of blank
/// lines left behind by PDF extraction.
fn normalize(text: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    let mut blank_run = 0;

    for line in text.lines().map(str::trim_end) {
        if line.is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        lines.push(line);
    }

    lines.join("\n").trim().to_string()
}
