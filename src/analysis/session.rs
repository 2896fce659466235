use crate::analysis::ResumeEnhancer;
use crate::error::{Error, Result};
use crate::models::{Document, DocumentKind, DocumentSet, OptimizedResume, ResumeAnalysis};

/// State for one interactive run: the uploaded documents and the most recent
/// results. Nothing here outlives the process unless exported.
pub struct EnhancementSession {
    enhancer: ResumeEnhancer,
    resume: Document,
    documents: Option<DocumentSet>,
    analysis: Option<ResumeAnalysis>,
    optimized: Option<OptimizedResume>,
}

impl EnhancementSession {
    pub fn new(enhancer: ResumeEnhancer, documents: DocumentSet) -> Self {
        Self {
            enhancer,
            resume: documents.resume.clone(),
            documents: Some(documents),
            analysis: None,
            optimized: None,
        }
    }

    /// Resumes from an analysis exported by an earlier run. Only the
    /// optimization step is available.
    pub fn from_analysis(enhancer: ResumeEnhancer, resume: Document, analysis: ResumeAnalysis) -> Result<Self> {
        if resume.kind != DocumentKind::Resume || resume.is_blank() {
            return Err(Error::MissingDocument(DocumentKind::Resume));
        }

        let mut session = Self {
            enhancer,
            resume,
            documents: None,
            analysis: None,
            optimized: None,
        };
        session.restore_analysis(analysis);
        Ok(session)
    }

    pub fn restore_analysis(&mut self, mut analysis: ResumeAnalysis) {
        if analysis.match_score.is_none() {
            analysis.match_score = crate::llm::parser::parse_score(&analysis.score);
        }
        self.analysis = Some(analysis);
        self.optimized = None;
    }

    pub async fn generate_report(&mut self) -> Result<&ResumeAnalysis> {
        let documents = self.documents.as_ref().ok_or(Error::DocumentsNotLoaded)?;

        let analysis = self.enhancer.analyze(documents).await?;
        self.optimized = None;
        Ok(&*self.analysis.insert(analysis))
    }

    pub async fn optimize_resume(&mut self) -> Result<&OptimizedResume> {
        let analysis = self.analysis.as_ref().ok_or(Error::NoAnalysis)?;
        let optimized = self.enhancer.optimize(&self.resume, analysis).await?;
        Ok(&*self.optimized.insert(optimized))
    }

    pub fn analysis(&self) -> Option<&ResumeAnalysis> {
        self.analysis.as_ref()
    }

    pub fn optimized(&self) -> Option<&OptimizedResume> {
        self.optimized.as_ref()
    }

    pub fn resume(&self) -> &Document {
        &self.resume
    }

    /// New score minus original score, when both were readable.
    pub fn score_delta(&self) -> Option<i16> {
        let before = self.analysis.as_ref()?.match_score?;
        let after = self.optimized.as_ref()?.new_match_score?;
        Some(after.value() as i16 - before.value() as i16)
    }
}
