//! Regression-diff report for acceleration-structure variants.
//!
//! Each `Accel-<variant>` entry in a working directory names a variant. The
//! regression run for a variant leaves one diff per (model, thread count)
//! under `Results/<variant>/Regression_tests/`; an empty diff is a pass.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use accel_report::{CheckConfig, report};
//! use std::path::Path;
//!
//! let config = CheckConfig::default();
//! let summary = report::run(Path::new("."), &config, &mut std::io::stdout())?;
//! println!("{} passed, {} failed", summary.passed(), summary.failed());
//! # Ok::<(), accel_report::ReportError>(())
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod exit;
pub mod report;
pub mod verify;

pub use config::CheckConfig;
pub use discovery::{discover_variants, variant_name, variant_os_name};
pub use error::{ReportError, Result};
pub use report::{RunSummary, Verdict, format_line};
pub use verify::{DiffStatus, PairCheck, VariantReport, check_diff, verify_variant};
