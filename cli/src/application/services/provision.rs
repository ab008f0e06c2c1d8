//! Application service: provision or tear down one IPsec site.
//!
//! Writes the rendered artifacts into a caller-owned working directory, then
//! hands the directory to the [`TerraformDriver`]. The caller creates and
//! removes the directory; this service never cleans up.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::{ArtifactWriter, CommandRunner, ProgressReporter};
use crate::application::services::terraform::TerraformDriver;
use crate::domain::artifacts;
use crate::domain::outputs::ProvisioningResult;
use crate::domain::request::ProvisioningRequest;

/// What to do with the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// init → plan → apply → output.
    Apply,
    /// init → destroy.
    Destroy,
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied(ProvisioningResult),
    Destroyed,
}

/// Everything the service needs besides the request.
pub struct ProvisionDeps<'a, R, W, P> {
    pub runner: &'a R,
    pub writer: &'a W,
    pub reporter: &'a P,
    /// Path or name of the `terraform` binary.
    pub binary: &'a str,
}

/// Render `request` into `workdir` and run `operation` against it.
///
/// # Errors
///
/// Returns an error if an artifact cannot be written (before any terraform
/// call) or if any terraform step fails.
pub async fn provision<R, W, P>(
    request: &ProvisioningRequest,
    operation: Operation,
    workdir: &Path,
    deps: &ProvisionDeps<'_, R, W, P>,
) -> Result<Outcome>
where
    R: CommandRunner,
    W: ArtifactWriter,
    P: ProgressReporter,
{
    let rendered = artifacts::render(request);
    deps.writer
        .write_artifacts(workdir, &rendered.files())
        .await
        .context("generating terraform files")?;
    tracing::info!(
        site = %request.site_name,
        backend = request.backend.kind(),
        workdir = %workdir.display(),
        "terraform files generated"
    );

    let mut driver = TerraformDriver::new(deps.runner, deps.reporter, deps.binary, workdir);
    match operation {
        Operation::Apply => driver.apply().await.map(Outcome::Applied),
        Operation::Destroy => driver.destroy().await.map(|()| Outcome::Destroyed),
    }
}
