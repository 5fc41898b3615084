use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use claimcheck_core::{
    BatchReport, ClaimVerifier, ConfigLoader, EvidenceItem, VerifierSettings,
};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "claimcheck-cli",
    version,
    about = "Keyword-overlap claim verification"
)]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Verify a single claim against evidence snippets.
    Verify(VerifyArgs),
    /// Verify a JSONL file of claim/evidence records.
    Batch(BatchArgs),
}

#[derive(Args, Debug)]
struct VerifyArgs {
    /// Claim to verify.
    #[arg(long)]
    claim: String,

    /// Inline evidence snippet (repeatable).
    #[arg(long = "evidence")]
    evidence: Vec<String>,

    /// JSON file holding an evidence array ("-" reads stdin); entries may be
    /// bare strings or {title, snippet} records.
    #[arg(long)]
    evidence_file: Option<PathBuf>,

    /// Override the keyword match threshold from configuration.
    #[arg(long)]
    threshold: Option<f64>,

    /// Pretty-print the JSON result.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// JSONL file of {"claim", "evidence"} records.
    #[arg(long)]
    path: PathBuf,

    /// Print each record's result as a JSON line before the summary.
    #[arg(long, default_value_t = false)]
    results: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ConfigLoader::load_or_default(cli.config.clone())?;

    // RUST_LOG wins; the configured level is the fallback.
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let settings = config.verifier.to_settings()?;

    match cli.command {
        Command::Verify(args) => verify_command(args, settings),
        Command::Batch(args) => batch_command(args, settings),
    }
}

fn verify_command(args: VerifyArgs, mut settings: VerifierSettings) -> Result<()> {
    if let Some(threshold) = args.threshold {
        settings.match_threshold = threshold;
        settings.validate()?;
    }

    let mut evidence: Vec<EvidenceItem> =
        args.evidence.into_iter().map(EvidenceItem::text).collect();
    if let Some(path) = args.evidence_file {
        evidence.extend(read_evidence_file(&path)?);
    }

    info!(claim = %args.claim, evidence_count = evidence.len(), "verifying claim");

    let verifier = ClaimVerifier::new(settings);
    let result = verifier.verify(&args.claim, &evidence);

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{rendered}");
    Ok(())
}

fn batch_command(args: BatchArgs, settings: VerifierSettings) -> Result<()> {
    info!(path = %args.path.display(), "running batch verification");

    let verifier = ClaimVerifier::new(settings);
    let report = BatchReport::analyze(&verifier, &args.path)?;

    if args.results {
        for result in &report.results {
            println!("{}", serde_json::to_string(result)?);
        }
    }
    println!("{}", report.metrics.summary());
    Ok(())
}

fn read_evidence_file(path: &Path) -> Result<Vec<EvidenceItem>> {
    let raw = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read evidence from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };

    serde_json::from_str(&raw).with_context(|| {
        format!(
            "{} is not a JSON array of strings or {{title, snippet}} records",
            path.display()
        )
    })
}
