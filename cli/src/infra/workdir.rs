//! Scratch working directory for one terraform run.
//!
//! Wraps a `tempfile::TempDir` named `cato-terraform-*`. The directory and
//! everything terraform put in it are removed when the guard is closed or
//! dropped, including on error and cancellation paths.

use std::path::Path;

use anyhow::{Context, Result};
use tempfile::TempDir;

const PREFIX: &str = "cato-terraform-";

/// Exclusively owned scratch directory.
#[derive(Debug)]
pub struct WorkingDirectory {
    dir: TempDir,
}

impl WorkingDirectory {
    /// Create a private directory under the system temp dir.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn create() -> Result<Self> {
        Self::create_in(std::env::temp_dir())
    }

    /// Create a private directory under `parent`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn create_in(parent: impl AsRef<Path>) -> Result<Self> {
        let parent = parent.as_ref();
        let dir = tempfile::Builder::new()
            .prefix(PREFIX)
            .tempdir_in(parent)
            .with_context(|| format!("failed to create work dir in {}", parent.display()))?;
        tracing::debug!(path = %dir.path().display(), "created working directory");
        Ok(Self { dir })
    }

    /// Path of the directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Remove the directory now, logging instead of failing if that does
    /// not work.
    pub fn close(self) {
        let path = self.dir.path().to_path_buf();
        if let Err(e) = self.dir.close() {
            tracing::warn!(path = %path.display(), error = %e, "failed to remove working directory");
        }
    }
}
