//! Acceleration-structure regression report
//!
//! Scans the working directory for `Accel-<variant>` entries and prints one
//! `Success`/`Failed` line per variant, based on whether every expected
//! `Results/<variant>/Regression_tests/<model>.n<thread>.diff` is an empty
//! regular file.
//!
//! # Usage
//!
//! ```bash
//! # Report on the current directory with the default model/thread matrix
//! accel-report
//!
//! # Another checkout, two models, fail the job if any variant failed
//! accel-report --dir ../ParKD --model teapot --model bunny --strict
//!
//! # Show which diff failed for each variant
//! RUST_LOG=accel_report=debug accel-report
//! ```

use std::io;
use std::path::PathBuf;
use std::process::exit;

use accel_report::exit::{EXIT_GENERIC_FAIL, EXIT_SUCCESS, EXIT_VARIANT_FAILED};
use accel_report::{CheckConfig, report};
use anyhow::{Context, Result};
use clap::Parser;

/// Summarize regression diff results per acceleration-structure variant
#[derive(Parser, Debug)]
#[command(name = "accel-report")]
#[command(about = "Report pass/fail of regression diffs per acceleration-structure variant")]
#[command(version)]
struct Cli {
    /// Directory containing the `Accel-*` entries and the `Results` tree
    #[arg(short = 'C', long, value_name = "PATH", default_value = ".")]
    dir: PathBuf,

    /// Model name to check (repeatable; replaces the default model list)
    #[arg(short, long = "model", value_name = "NAME")]
    models: Vec<String>,

    /// Thread count to check (repeatable or comma-separated; replaces the default list)
    #[arg(short, long = "threads", value_name = "N", value_delimiter = ',')]
    threads: Vec<u32>,

    /// Prefix marking a directory entry as a variant
    #[arg(long, value_name = "STR")]
    prefix: Option<String>,

    /// Sort variants by name instead of directory-listing order
    #[arg(long)]
    sorted: bool,

    /// Exit with a non-zero status when any variant failed
    #[arg(long)]
    strict: bool,

    /// Log level used when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn check_config(&self) -> CheckConfig {
        let mut config = CheckConfig::default();
        if !self.models.is_empty() {
            config = config.with_models(self.models.iter().cloned());
        }
        if !self.threads.is_empty() {
            config = config.with_threads(self.threads.iter().copied());
        }
        if let Some(prefix) = &self.prefix {
            config = config.with_prefix(prefix.as_str());
        }
        config
    }
}

fn main() {
    let cli = Cli::parse();
    setup_logging(&cli.log_level);

    match run(&cli) {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            exit(EXIT_GENERIC_FAIL);
        }
    }
}

fn run(cli: &Cli) -> Result<i32> {
    let config = cli.check_config();
    tracing::debug!(?config, dir = %cli.dir.display(), "starting report");

    let summary = report::run_with_order(&cli.dir, &config, cli.sorted, &mut io::stdout().lock())
        .with_context(|| format!("generating report for {}", cli.dir.display()))?;

    if cli.strict && !summary.all_passed() {
        tracing::warn!("{} of {} variant(s) failed", summary.failed(), summary.variants.len());
        return Ok(EXIT_VARIANT_FAILED);
    }
    Ok(EXIT_SUCCESS)
}

/// Logs go to stderr; stdout carries only the report.
fn setup_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}
