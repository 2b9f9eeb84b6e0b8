//! Check configuration: which diff files a variant is expected to have.

use std::path::{Path, PathBuf};

/// Prefix that marks a working-directory entry as a variant.
pub const DEFAULT_PREFIX: &str = "Accel-";
/// Directory (relative to the working directory) holding per-variant results.
pub const RESULTS_DIR: &str = "Results";
/// Subdirectory of each variant's results holding the regression diffs.
pub const REGRESSION_SUBDIR: &str = "Regression_tests";
/// Width the variant identifier is right-aligned to in the report.
pub const LABEL_WIDTH: usize = 14;

const DEFAULT_MODELS: &[&str] = &["teapot"];
const DEFAULT_THREADS: &[u32] = &[1, 4];

/// Immutable description of the (model, thread) product checked per variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    pub prefix: String,
    pub results_dir: PathBuf,
    pub regression_subdir: PathBuf,
    pub models: Vec<String>,
    pub threads: Vec<u32>,
    pub label_width: usize,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_owned(),
            results_dir: PathBuf::from(RESULTS_DIR),
            regression_subdir: PathBuf::from(REGRESSION_SUBDIR),
            models: DEFAULT_MODELS.iter().map(|m| (*m).to_owned()).collect(),
            threads: DEFAULT_THREADS.to_vec(),
            label_width: LABEL_WIDTH,
        }
    }
}

impl CheckConfig {
    pub fn with_models<I, S>(mut self, models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.models = models.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_threads<I>(mut self, threads: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        self.threads = threads.into_iter().collect();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Number of diff files expected per variant.
    pub fn pairs_per_variant(&self) -> usize {
        self.models.len() * self.threads.len()
    }

    /// Expected diff file for one (model, thread) pair:
    /// `<root>/Results/<variant>/Regression_tests/<model>.n<thread>.diff`.
    pub fn diff_path(
        &self,
        root: &Path,
        variant: impl AsRef<Path>,
        model: &str,
        thread: u32,
    ) -> PathBuf {
        root.join(&self.results_dir)
            .join(variant)
            .join(&self.regression_subdir)
            .join(format!("{model}.n{thread}.diff"))
    }
}
