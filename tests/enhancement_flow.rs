mod common;

use std::path::Path;

use common::{ScriptedProvider, ANALYSIS_REPLY, OPTIMIZATION_REPLY};
use resume_enhancer::models::DocumentKind;
use resume_enhancer::output::{self, OutputFormat};
use resume_enhancer::{DocumentLoader, EnhancementSession, Error, ResumeEnhancer, RetryPolicy};

const RESUME: &str = "tests/fixtures/sample_resume.txt";
const JOB: &str = "tests/fixtures/job_description.txt";
const COMPANY: &str = "tests/fixtures/company_info.md";

#[tokio::test]
async fn test_fixture_documents_load() {
    let loader = DocumentLoader::new();
    let documents = loader
        .load_set(Path::new(RESUME), Path::new(JOB), Path::new(COMPANY))
        .await
        .unwrap();

    assert!(documents.resume.content.starts_with("Jane Doe"));
    // runs of blank lines collapse to one
    assert!(!documents.resume.content.contains("\n\n\n"));
    assert!(documents.job_description.content.contains("Kafka"));
    assert!(documents.company_info.content.contains("**ownership**"));
}

#[tokio::test]
async fn test_unsupported_upload_is_rejected() {
    let loader = DocumentLoader::new();
    let result = loader
        .load_set(
            Path::new(RESUME),
            Path::new(JOB),
            Path::new("tests/fixtures/unsupported.docx"),
        )
        .await;

    assert!(matches!(result, Err(Error::UnsupportedFileType(_))));
}

#[tokio::test]
async fn test_full_flow_with_export_and_resume() {
    let out = tempfile::tempdir().unwrap();
    let loader = DocumentLoader::new();
    let documents = loader
        .load_set(Path::new(RESUME), Path::new(JOB), Path::new(COMPANY))
        .await
        .unwrap();

    // First run: analysis only, exported to disk.
    let provider = ScriptedProvider::new(vec![Ok(ANALYSIS_REPLY.to_string())]);
    let enhancer = ResumeEnhancer::new(provider.clone(), RetryPolicy::none());
    let mut session = EnhancementSession::new(enhancer, documents);

    let analysis = session.generate_report().await.unwrap();
    assert_eq!(
        analysis.tailoring_suggestions,
        "1. Add event streaming work\n2. Quantify ownership of the routing service"
    );
    assert_eq!(analysis.match_score.map(|s| s.value()), Some(64));
    let analysis_path = output::export_analysis(out.path(), analysis).unwrap();

    let prompts = provider.prompts();
    assert!(prompts[0].contains("<job_description>\nSenior Rust Engineer"));

    // Second run: optimize from the exported analysis.
    let saved = output::load_analysis(&analysis_path).unwrap();
    let resume = loader
        .load(DocumentKind::Resume, Path::new(RESUME))
        .await
        .unwrap();
    let provider = ScriptedProvider::new(vec![Ok(OPTIMIZATION_REPLY.to_string())]);
    let enhancer = ResumeEnhancer::new(provider.clone(), RetryPolicy::none());
    let mut session = EnhancementSession::from_analysis(enhancer, resume, saved).unwrap();

    session.optimize_resume().await.unwrap();
    assert_eq!(session.score_delta(), Some(15));
    assert!(provider.prompts()[0].contains("Add event streaming work"));

    let optimized = session.optimized().unwrap();
    let rendered = output::render_optimization(optimized, session.score_delta(), OutputFormat::Text).unwrap();
    assert!(rendered.contains("New Score: 79/100 (+15)"));

    let resume_path = output::export_optimized_resume(out.path(), optimized).unwrap();
    let written = std::fs::read_to_string(resume_path).unwrap();
    assert!(written.starts_with("Jane Doe\nBackend Engineer, Parcelhub"));
    assert!(!written.contains("<optimized_resume>"));
}

#[tokio::test]
async fn test_transient_failures_are_retried() {
    let documents = DocumentLoader::new()
        .load_set(Path::new(RESUME), Path::new(JOB), Path::new(COMPANY))
        .await
        .unwrap();

    let provider = ScriptedProvider::new(vec![
        Err(Error::RateLimited(0)),
        Err(Error::ServerError(529)),
        Ok(ANALYSIS_REPLY.to_string()),
    ]);
    let retry = RetryPolicy {
        max_retries: 2,
        initial_backoff: std::time::Duration::from_millis(1),
        max_backoff: std::time::Duration::from_millis(2),
    };
    let mut session = EnhancementSession::new(ResumeEnhancer::new(provider.clone(), retry), documents);

    session.generate_report().await.unwrap();
    assert_eq!(provider.prompts().len(), 3);
}

#[tokio::test]
async fn test_malformed_reply_surfaces_missing_tag() {
    let documents = DocumentLoader::new()
        .load_set(Path::new(RESUME), Path::new(JOB), Path::new(COMPANY))
        .await
        .unwrap();

    let reply = ANALYSIS_REPLY.replace("</tailoring_suggestions>", "");
    let provider = ScriptedProvider::new(vec![Ok(reply)]);
    let mut session = EnhancementSession::new(ResumeEnhancer::new(provider, RetryPolicy::none()), documents);

    match session.generate_report().await {
        Err(Error::MissingTag(tag)) => assert_eq!(tag, "tailoring_suggestions"),
        other => panic!("expected missing tag, got {:?}", other.map(|a| a.score.clone())),
    }
    assert!(session.analysis().is_none());
}
