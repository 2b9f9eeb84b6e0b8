//! Diff-file verification.
//!
//! A regression pair passes only when its diff file exists, is a regular file
//! and is zero bytes long. Nothing here returns an error: an unreadable or
//! missing diff is an ordinary failed check.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::CheckConfig;

/// Outcome of checking one expected diff file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffStatus {
    /// Zero-length regular file.
    Empty,
    /// Regular file with this many bytes of diff output.
    NonEmpty(u64),
    /// Exists but is a directory or special file.
    NotRegular,
    /// Status could not be obtained (missing, permission denied, dangling link).
    Missing(io::ErrorKind),
}

impl DiffStatus {
    pub fn passed(self) -> bool {
        matches!(self, DiffStatus::Empty)
    }
}

impl fmt::Display for DiffStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffStatus::Empty => write!(f, "empty"),
            DiffStatus::NonEmpty(size) => write!(f, "non-empty ({size} bytes)"),
            DiffStatus::NotRegular => write!(f, "not a regular file"),
            DiffStatus::Missing(kind) => write!(f, "unavailable ({kind})"),
        }
    }
}

/// Stat `path`, following symlinks, and classify it.
pub fn check_diff(path: &Path) -> DiffStatus {
    match fs::metadata(path) {
        Err(e) => DiffStatus::Missing(e.kind()),
        Ok(meta) if !meta.is_file() => DiffStatus::NotRegular,
        Ok(meta) if meta.len() > 0 => DiffStatus::NonEmpty(meta.len()),
        Ok(_) => DiffStatus::Empty,
    }
}

/// One (model, thread) check of a variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairCheck {
    pub model: String,
    pub thread: u32,
    pub path: PathBuf,
    pub status: DiffStatus,
}

/// Every pair check for a variant, in model-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantReport {
    pub variant: OsString,
    pub checks: Vec<PairCheck>,
}

impl VariantReport {
    /// Variant identifier for display; non UTF-8 bytes are replaced.
    pub fn name(&self) -> Cow<'_, str> {
        self.variant.to_string_lossy()
    }

    /// True when every pair passed; vacuously true with no pairs configured.
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|c| c.status.passed())
    }

    pub fn failures(&self) -> impl Iterator<Item = &PairCheck> {
        self.checks.iter().filter(|c| !c.status.passed())
    }
}

/// Check every (model, thread) pair of `config` for `variant` under `root`.
///
/// All pairs are evaluated even after a failure so the report is complete.
pub fn verify_variant(
    root: &Path,
    config: &CheckConfig,
    variant: impl AsRef<OsStr>,
) -> VariantReport {
    let variant = variant.as_ref();
    let name = variant.to_string_lossy();
    let mut checks = Vec::with_capacity(config.pairs_per_variant());
    for model in &config.models {
        for &thread in &config.threads {
            let path = config.diff_path(root, variant, model, thread);
            let status = check_diff(&path);
            debug!(
                variant = %name,
                model = model.as_str(),
                thread,
                path = %path.display(),
                %status,
                "diff check"
            );
            checks.push(PairCheck { model: model.clone(), thread, path, status });
        }
    }

    let report = VariantReport { variant: variant.to_os_string(), checks };
    info!(
        variant = %name,
        checked = report.checks.len(),
        failed = report.failures().count(),
        "variant verified"
    );
    report
}
