//! CLI entrypoint for crosscheck
//!
//! Wires the layers together: loads configuration, builds the HTTP
//! gateway, runs the use case once, and prints the result.

mod output;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use crosscheck_application::RunCrosscheckUseCase;
use crosscheck_domain::CrosscheckRequest;
use crosscheck_infrastructure::{ConfigLoader, HttpCompletionGateway};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Consensus plus the per-provider manifest.
    Full,
    /// Just the consensus answer.
    Answer,
    /// The whole result as pretty JSON.
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "crosscheck", version, about = "Crosscheck a question across several LLM providers")]
struct Cli {
    /// The question to crosscheck
    question: String,

    /// Jurisdiction the question is scoped to
    #[arg(long)]
    jurisdiction: Option<String>,

    /// Known facts, as a free text block
    #[arg(long)]
    facts: Option<String>,

    /// Tone/format guidance for the answer
    #[arg(long)]
    constraints: Option<String>,

    /// Completion token budget per call (clamped to 200..=2000)
    #[arg(long)]
    max_tokens: Option<u32>,

    /// Per-call deadline in milliseconds (clamped to 8000..=120000)
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Comma-separated OpenRouter downstream models, one call each
    #[arg(long)]
    models: Option<String>,

    /// Explicit config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Full)]
    output: OutputFormat,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let file = ConfigLoader::load(cli.config.as_ref()).context("loading configuration")?;
    let (mut run_config, settings) = ConfigLoader::resolve(&file);

    if let Some(csv) = &cli.models {
        run_config = run_config.with_openrouter_models_csv(csv);
    }

    let mut request = match CrosscheckRequest::new(&cli.question) {
        Ok(request) => request,
        Err(e) => bail!("{e}"),
    };
    if let Some(jurisdiction) = cli.jurisdiction {
        request = request.with_jurisdiction(jurisdiction);
    }
    if let Some(facts) = cli.facts {
        request = request.with_facts(facts);
    }
    if let Some(constraints) = cli.constraints {
        request = request.with_constraints(constraints);
    }
    if let Some(max_tokens) = cli.max_tokens {
        request = request.with_max_tokens(max_tokens);
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        request = request.with_timeout_ms(timeout_ms);
    }

    info!("Starting crosscheck");

    // === Dependency Injection ===
    let gateway = Arc::new(HttpCompletionGateway::new(settings));
    let use_case = RunCrosscheckUseCase::new(gateway, run_config);

    let result = use_case.execute(request).await?;

    let rendered = match cli.output {
        OutputFormat::Full => output::format_full(&result),
        OutputFormat::Answer => result.consensus.answer.clone(),
        OutputFormat::Json => serde_json::to_string_pretty(&result)?,
    };
    println!("{rendered}");

    // A total provider failure is visible in the exit code so scripts
    // don't have to parse the output.
    if !result.ok {
        std::process::exit(1);
    }
    Ok(())
}
