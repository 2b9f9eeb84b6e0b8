//! Report rendering and the end-to-end run.

use std::fmt;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::config::CheckConfig;
use crate::discovery::discover_variants;
use crate::error::Result;
use crate::verify::{VariantReport, verify_variant};

/// Per-variant verdict printed in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Success,
    Failed,
}

impl From<&VariantReport> for Verdict {
    fn from(report: &VariantReport) -> Self {
        if report.passed() { Verdict::Success } else { Verdict::Failed }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verdict::Success => "Success",
            Verdict::Failed => "Failed",
        })
    }
}

/// `# <variant right-aligned to width> : <verdict>`. Long names are not cut.
pub fn format_line(variant: &str, verdict: Verdict, width: usize) -> String {
    format!("# {variant:>width$} : {verdict}")
}

/// Results of one run, in report order.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub variants: Vec<VariantReport>,
}

impl RunSummary {
    pub fn passed(&self) -> usize {
        self.variants.iter().filter(|v| v.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.variants.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

/// Discover variants under `root`, verify each one and write a line per
/// variant to `out` in directory-listing order.
pub fn run(root: &Path, config: &CheckConfig, out: &mut impl Write) -> Result<RunSummary> {
    run_with_order(root, config, false, out)
}

/// Same as [`run`], optionally sorting variants by identifier first.
pub fn run_with_order(
    root: &Path,
    config: &CheckConfig,
    sorted: bool,
    out: &mut impl Write,
) -> Result<RunSummary> {
    let mut variants = discover_variants(root, &config.prefix)?;
    if sorted {
        variants.sort();
    }

    let mut summary = RunSummary::default();
    for variant in &variants {
        let report = verify_variant(root, config, variant);
        let line = format_line(&report.name(), Verdict::from(&report), config.label_width);
        writeln!(out, "{line}")?;
        summary.variants.push(report);
    }
    out.flush()?;

    info!(
        variants = summary.variants.len(),
        passed = summary.passed(),
        failed = summary.failed(),
        "report complete"
    );
    Ok(summary)
}
