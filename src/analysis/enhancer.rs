use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;

use crate::error::Result;
use crate::llm::parser::{parse_analysis, parse_optimization};
use crate::llm::{AnalysisRequest, LLMProvider, OptimizationRequest, RetryPolicy};
use crate::models::{Document, DocumentSet, OptimizedResume, ResumeAnalysis};

/// Runs the two LLM exchanges: score the resume, then rewrite it.
pub struct ResumeEnhancer {
    llm: Arc<dyn LLMProvider>,
    retry: RetryPolicy,
    show_progress: bool,
}

impl ResumeEnhancer {
    pub fn new(llm: Arc<dyn LLMProvider>, retry: RetryPolicy) -> Self {
        Self {
            llm,
            retry,
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn provider_name(&self) -> &str {
        self.llm.name()
    }

    pub async fn analyze(&self, documents: &DocumentSet) -> Result<ResumeAnalysis> {
        let request = AnalysisRequest::new(documents);
        let prompt = request.to_prompt();
        tracing::debug!(
            "Sending ~{} tokens to {} for analysis",
            request.estimate_tokens(),
            self.llm.name()
        );

        let response = self
            .complete("Analyzing resume", "resume analysis", &prompt)
            .await?;
        let fields = parse_analysis(&response)?;
        let analysis = ResumeAnalysis::from_fields(fields, self.llm.name(), self.llm.model());

        match analysis.match_score {
            Some(score) => tracing::info!("Resume scored {}", score),
            None => tracing::warn!("Could not read a numeric score from '{}'", analysis.score),
        }

        Ok(analysis)
    }

    pub async fn optimize(
        &self,
        resume: &Document,
        analysis: &ResumeAnalysis,
    ) -> Result<OptimizedResume> {
        let request = OptimizationRequest::new(resume, analysis);
        let prompt = request.to_prompt();
        tracing::debug!(
            "Sending ~{} tokens to {} for optimization",
            request.estimate_tokens(),
            self.llm.name()
        );

        let response = self
            .complete("Optimizing resume", "resume optimization", &prompt)
            .await?;
        let fields = parse_optimization(&response)?;
        let optimized = OptimizedResume::from_fields(fields, self.llm.name(), self.llm.model());

        if let Some(score) = optimized.new_match_score {
            tracing::info!("Optimized resume scored {}", score);
        }

        Ok(optimized)
    }

    async fn complete(&self, message: &str, operation: &str, prompt: &str) -> Result<String> {
        let spinner = self.spinner(message);
        let llm = self.llm.as_ref();

        let result = self
            .retry
            .run(operation, move || llm.complete(prompt))
            .await;

        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }
        result
    }

    fn spinner(&self, message: &str) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}") {
            pb.set_style(style);
        }
        pb.set_message(format!("{} with {}...", message, self.llm.name()));
        pb.enable_steady_tick(Duration::from_millis(120));
        Some(pb)
    }
}
