//! Fixture helpers shared by the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A scratch working directory laid out like a regression checkout.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self { dir: TempDir::new().unwrap() }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Create the `Accel-<variant>` directory.
    pub fn variant(&self, variant: &str) -> &Self {
        fs::create_dir_all(self.root().join(format!("Accel-{variant}"))).unwrap();
        self
    }

    fn regression_dir(&self, variant: &str) -> PathBuf {
        let dir = self.root().join("Results").join(variant).join("Regression_tests");
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Write `<model>.n<thread>.diff` for `variant` with the given contents.
    pub fn diff(&self, variant: &str, model: &str, thread: u32, contents: &[u8]) -> &Self {
        let path = self.regression_dir(variant).join(format!("{model}.n{thread}.diff"));
        fs::write(path, contents).unwrap();
        self
    }

    /// Variant with an empty diff for every default (model, thread) pair.
    pub fn passing_variant(&self, variant: &str) -> &Self {
        self.variant(variant).diff(variant, "teapot", 1, b"").diff(variant, "teapot", 4, b"")
    }
}
