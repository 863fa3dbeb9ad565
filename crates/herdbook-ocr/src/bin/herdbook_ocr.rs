//! herdbook-ocr - command line front end
//!
//! Matches single registry codes and post-processes recognized report pages
//! read from JSON files. Output is JSON on stdout.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use herdbook_domain::{
    AnimalRecord, OcrAspiracaoResult, OcrCorrection, OcrResult, ReportType,
};
use herdbook_ocr::{
    HerdbookConfig, LeveledMatch, PostProcessor, Reconciler, RegistryMatcher, Result,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// herdbook-ocr - registry matching for recognized herd reports
#[derive(Parser, Debug)]
#[command(name = "herdbook-ocr")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Configuration file (.json or .toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Match one raw registry code against the candidate pool
    Match {
        /// Raw code as recognized
        value: String,

        /// JSON array of animal records
        #[arg(long)]
        candidates: PathBuf,
    },

    /// Post-process recognized pages and merge them into one report
    Process {
        /// JSON array of animal records
        #[arg(long)]
        candidates: PathBuf,

        /// JSON array of learned corrections
        #[arg(long)]
        corrections: Option<PathBuf>,

        /// Report type (p1, p2, te, dg, sexagem, aspiracao)
        #[arg(long)]
        report_type: ReportType,

        /// Page files, in page order
        #[arg(required = true)]
        pages: Vec<PathBuf>,
    },
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => HerdbookConfig::from_path(path)?,
        None => HerdbookConfig::default(),
    };

    match cli.command {
        Commands::Match { value, candidates } => {
            let candidates: Vec<AnimalRecord> = read_json(&candidates)?;
            let matcher = RegistryMatcher::new(config.matching.clone());
            let result = matcher.match_registro(&value, &candidates);
            print_json(&LeveledMatch::new(result, &config.levels))?;
        }
        Commands::Process {
            candidates,
            corrections,
            report_type,
            pages,
        } => {
            let candidates: Vec<AnimalRecord> = read_json(&candidates)?;
            let corrections: Vec<OcrCorrection> = match corrections {
                Some(path) => read_json(&path)?,
                None => Vec::new(),
            };
            info!(
                pages = pages.len(),
                candidates = candidates.len(),
                corrections = corrections.len(),
                %report_type,
                "processing report"
            );

            if report_type == ReportType::Aspiracao {
                let merged = process_aspiracao(&config, &pages, &candidates)?;
                print_json(&merged)?;
            } else {
                let merged = process_pages(&config, &pages, &candidates, &corrections, report_type)?;
                print_json(&merged)?;
            }
        }
    }

    Ok(())
}

fn process_pages(
    config: &HerdbookConfig,
    pages: &[PathBuf],
    candidates: &[AnimalRecord],
    corrections: &[OcrCorrection],
    report_type: ReportType,
) -> Result<OcrResult> {
    let processor = PostProcessor::new(config);
    let mut processed = Vec::with_capacity(pages.len());
    for path in pages {
        let page: OcrResult = read_json(path)?;
        processed.push(processor.process(page, candidates, corrections, report_type));
    }
    Ok(merge_if_multipage(config, processed))
}

/// Aspiration sheets carry counts instead of a result code, so only the
/// registry match runs on them
fn process_aspiracao(
    config: &HerdbookConfig,
    pages: &[PathBuf],
    candidates: &[AnimalRecord],
) -> Result<OcrAspiracaoResult> {
    let processor = PostProcessor::new(config);
    let mut processed = Vec::with_capacity(pages.len());
    for path in pages {
        let mut page: OcrAspiracaoResult = read_json(path)?;
        processor.match_rows_against_db(&mut page.rows, candidates);
        processed.push(page);
    }
    Ok(merge_if_multipage(config, processed))
}

fn merge_if_multipage<R: herdbook_domain::RegistroRow>(
    config: &HerdbookConfig,
    mut pages: Vec<OcrResult<R>>,
) -> OcrResult<R> {
    if pages.len() == 1 {
        if let Some(page) = pages.pop() {
            return page;
        }
    }
    Reconciler::new(config.reconcile.clone()).merge(pages)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
