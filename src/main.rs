use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use resume_enhancer::models::DocumentKind;
use resume_enhancer::output::{self, OutputFormat};
use resume_enhancer::{
    build_provider, Config, DocumentLoader, EnhancementSession, ProviderKind, ResumeEnhancer,
    RetryPolicy,
};

#[derive(Parser, Debug)]
#[command(name = "resume-enhancer")]
#[command(version = "0.1.0")]
#[command(about = "Score a resume against a job description and rewrite it with an LLM")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// LLM provider (anthropic, gemini); overrides LLM_PROVIDER
    #[arg(short, long, global = true)]
    provider: Option<String>,

    /// Model name for the selected provider
    #[arg(short, long, global = true)]
    model: Option<String>,

    /// Output format (text, markdown, json)
    #[arg(short, long, global = true, default_value = "text")]
    format: String,

    /// Directory for resume_analysis.json and optimized_resume.txt
    #[arg(short, long, global = true)]
    output_dir: Option<PathBuf>,

    /// Do not write result files
    #[arg(long, global = true)]
    no_export: bool,

    /// Hide the progress spinner
    #[arg(long, global = true)]
    quiet: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a resume against a job description and company background
    Analyze {
        #[command(flatten)]
        inputs: AnalyzeInputs,

        /// Also produce an optimized resume from the suggestions
        #[arg(long)]
        optimize: bool,
    },

    /// Optimize a resume using a previously exported analysis
    Optimize {
        /// Resume file (.txt, .md, .pdf)
        #[arg(short, long)]
        resume: PathBuf,

        /// Exported analysis (defaults to <output-dir>/resume_analysis.json)
        #[arg(short, long)]
        analysis: Option<PathBuf>,
    },
}

#[derive(ClapArgs, Debug)]
struct AnalyzeInputs {
    /// Resume file (.txt, .md, .pdf)
    #[arg(short, long)]
    resume: PathBuf,

    /// Job description file (.txt, .md, .pdf)
    #[arg(short, long)]
    job_description: PathBuf,

    /// Company information file (.txt, .md, .pdf)
    #[arg(short, long)]
    company_info: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("resume_enhancer={}", level).parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    dotenvy::dotenv().ok();

    let mut config = Config::from_env()?;
    if let Some(ref provider) = args.provider {
        config.provider = provider.parse::<ProviderKind>()?;
    }
    if let Some(ref model) = args.model {
        config.set_model(model.clone());
    }
    if let Some(ref dir) = args.output_dir {
        config.output_dir = dir.clone();
    }
    let format: OutputFormat = args.format.parse()?;

    let llm = build_provider(&config)?;
    let enhancer = ResumeEnhancer::new(llm, RetryPolicy::new(config.max_retries))
        .with_progress(!args.quiet);
    let loader = DocumentLoader::new();

    match args.command {
        Command::Analyze { ref inputs, optimize } => {
            let documents = loader
                .load_set(&inputs.resume, &inputs.job_description, &inputs.company_info)
                .await?;
            tracing::info!(
                "Analyzing {} with {}",
                documents.resume.source_label(),
                enhancer.provider_name()
            );

            let mut session = EnhancementSession::new(enhancer, documents);
            let analysis = session.generate_report().await?;
            println!("{}", output::render_analysis(analysis, format)?);
            if !args.no_export {
                output::export_analysis(&config.output_dir, analysis)?;
            }

            if optimize {
                run_optimization(&mut session, format, &config.output_dir, args.no_export).await?;
            }
        }
        Command::Optimize { ref resume, ref analysis } => {
            let analysis_path = analysis
                .clone()
                .unwrap_or_else(|| config.output_dir.join(output::ANALYSIS_FILE));
            let saved = output::load_analysis(&analysis_path)?;
            tracing::info!("Loaded analysis from {}", analysis_path.display());

            let resume = loader.load(DocumentKind::Resume, resume).await?;
            let mut session = EnhancementSession::from_analysis(enhancer, resume, saved)?;
            run_optimization(&mut session, format, &config.output_dir, args.no_export).await?;
        }
    }

    Ok(())
}

async fn run_optimization(
    session: &mut EnhancementSession,
    format: OutputFormat,
    output_dir: &Path,
    no_export: bool,
) -> anyhow::Result<()> {
    session.optimize_resume().await?;

    if let Some(optimized) = session.optimized() {
        println!(
            "{}",
            output::render_optimization(optimized, session.score_delta(), format)?
        );
        if !no_export {
            output::export_optimized_resume(output_dir, optimized)?;
        }
    }

    Ok(())
}
