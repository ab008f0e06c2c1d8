//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::Path;
use std::process::Output;

use anyhow::Result;

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program to completion and capture its output.
    ///
    /// There is no timeout: dropping the returned future is the only way to
    /// cancel, and implementations must kill the child when that happens.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or waited on. A
    /// non-zero exit status is NOT an error at this level.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit an informational note.
    fn info(&self, message: &str);
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Abstracts writing generated artifacts into a directory.
#[allow(async_fn_in_trait)]
pub trait ArtifactWriter {
    /// Write each `(file name, content)` pair into `dir`.
    ///
    /// # Errors
    ///
    /// Returns the first write error. Files written before it are left in
    /// place; the owner of `dir` is responsible for removing them.
    async fn write_artifacts(&self, dir: &Path, files: &[(&str, &str)]) -> Result<()>;
}
