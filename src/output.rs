use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::models::{OptimizedResume, ResumeAnalysis};

pub const ANALYSIS_FILE: &str = "resume_analysis.json";
pub const OPTIMIZED_RESUME_FILE: &str = "optimized_resume.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Markdown,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::Config(format!(
                "Unknown output format '{}' (expected text, markdown or json)",
                other
            ))),
        }
    }
}

pub fn render_analysis(analysis: &ResumeAnalysis, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(analysis)?,
        OutputFormat::Markdown => analysis_markdown(analysis),
        OutputFormat::Text => analysis_text(analysis),
    })
}

pub fn render_optimization(
    optimized: &OptimizedResume,
    score_delta: Option<i16>,
    format: OutputFormat,
) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(optimized)?,
        OutputFormat::Markdown => optimization_markdown(optimized, score_delta),
        OutputFormat::Text => optimization_text(optimized, score_delta),
    })
}

fn score_line(raw: &str, parsed: Option<crate::models::MatchScore>) -> String {
    match parsed {
        Some(score) => score.to_string(),
        None if raw.is_empty() => "n/a".to_string(),
        None => raw.to_string(),
    }
}

fn delta_suffix(score_delta: Option<i16>) -> String {
    score_delta
        .map(|d| format!(" ({:+})", d))
        .unwrap_or_default()
}

fn analysis_text(analysis: &ResumeAnalysis) -> String {
    let mut output = String::new();

    output.push_str("\n=== Resume Analysis ===\n\n");
    output.push_str(&format!(
        "Match Score: {}\n",
        score_line(&analysis.score, analysis.match_score)
    ));
    if !analysis.provider.is_empty() {
        output.push_str(&format!("Provider: {} ({})\n", analysis.provider, analysis.model));
    }

    output.push_str(&format!("\nAnalysis:\n{}\n", analysis.analysis));
    output.push_str(&format!(
        "\nTailoring Suggestions:\n{}\n",
        analysis.tailoring_suggestions
    ));
    output.push_str(&format!(
        "\nScore Justification:\n{}\n",
        analysis.score_justification
    ));

    output.push_str(&format!(
        "\nAnalyzed on: {}\n",
        analysis.analyzed_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

fn analysis_markdown(analysis: &ResumeAnalysis) -> String {
    let mut output = String::new();

    output.push_str("# Resume Analysis\n\n");
    output.push_str("| Metric | Value |\n|--------|-------|\n");
    output.push_str(&format!(
        "| Match Score | {} |\n",
        score_line(&analysis.score, analysis.match_score)
    ));
    if !analysis.provider.is_empty() {
        output.push_str(&format!("| Provider | {} |\n", analysis.provider));
        output.push_str(&format!("| Model | {} |\n", analysis.model));
    }

    output.push_str(&format!("\n## Analysis\n\n{}\n", analysis.analysis));
    output.push_str(&format!(
        "\n## Tailoring Suggestions\n\n{}\n",
        analysis.tailoring_suggestions
    ));
    output.push_str(&format!(
        "\n## Score Justification\n\n{}\n",
        analysis.score_justification
    ));

    output.push_str(&format!(
        "\n---\n*Analyzed on {}*\n",
        analysis.analyzed_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

fn optimization_text(optimized: &OptimizedResume, score_delta: Option<i16>) -> String {
    let mut output = String::new();

    output.push_str("\n=== Optimized Resume ===\n\n");
    output.push_str(&format!(
        "New Score: {}{}\n",
        score_line(&optimized.new_score, optimized.new_match_score),
        delta_suffix(score_delta)
    ));

    output.push_str(&format!("\n{}\n", optimized.optimized_resume));
    output.push_str(&format!("\nChanges Made:\n{}\n", optimized.changes_made));
    output.push_str(&format!(
        "\nScore Justification:\n{}\n",
        optimized.score_justification
    ));

    output
}

fn optimization_markdown(optimized: &OptimizedResume, score_delta: Option<i16>) -> String {
    let mut output = String::new();

    output.push_str("# Optimized Resume\n\n");
    output.push_str(&format!(
        "**New Score:** {}{}\n\n",
        score_line(&optimized.new_score, optimized.new_match_score),
        delta_suffix(score_delta)
    ));
    output.push_str(&format!("```text\n{}\n```\n", optimized.optimized_resume));
    output.push_str(&format!("\n## Changes Made\n\n{}\n", optimized.changes_made));
    output.push_str(&format!(
        "\n## Score Justification\n\n{}\n",
        optimized.score_justification
    ));

    output
}

pub fn export_analysis(dir: &Path, analysis: &ResumeAnalysis) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(ANALYSIS_FILE);
    std::fs::write(&path, serde_json::to_string_pretty(analysis)?)?;
    tracing::info!("Analysis written to: {}", path.display());
    Ok(path)
}

pub fn export_optimized_resume(dir: &Path, optimized: &OptimizedResume) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(OPTIMIZED_RESUME_FILE);
    std::fs::write(&path, format!("{}\n", optimized.optimized_resume))?;
    tracing::info!("Optimized resume written to: {}", path.display());
    Ok(path)
}

pub fn load_analysis(path: &Path) -> Result<ResumeAnalysis> {
    let json = std::fs::read_to_string(path)?;
    serde_json::from_str(&json)
        .map_err(|e| Error::ParseError(format!("Invalid analysis file '{}': {}", path.display(), e)))
}
