//! Terraform lifecycle driver.
//!
//! Sequences `init`, `plan`, `apply`/`destroy` and `output` against one
//! working directory, fail-fast and without retries. Every step is checked
//! against [`DriverState`]; a failure leaves the driver in
//! [`DriverState::Failed`] for good.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::path::Path;
use std::process::Output;

use anyhow::Result;

use crate::application::ports::{CommandRunner, ProgressReporter};
use crate::domain::error::TerraformError;
use crate::domain::lifecycle::{DriverState, Step, plan_has_changes};
use crate::domain::outputs::{self, ProvisioningResult};

/// Saved plan, relative to the working directory.
pub const PLAN_FILE: &str = "tfplan";

/// Arguments appended after the subcommand for every step.
const COMMON_ARGS: &[&str] = &["-input=false", "-no-color"];

/// Drives the `terraform` binary through one lifecycle.
pub struct TerraformDriver<'a, R: CommandRunner, P: ProgressReporter> {
    runner: &'a R,
    reporter: &'a P,
    binary: &'a str,
    chdir: String,
    state: DriverState,
}

impl<'a, R: CommandRunner, P: ProgressReporter> TerraformDriver<'a, R, P> {
    /// Create a driver for `workdir`, which must already hold the generated
    /// artifacts.
    pub fn new(runner: &'a R, reporter: &'a P, binary: &'a str, workdir: &Path) -> Self {
        Self {
            runner,
            reporter,
            binary,
            chdir: format!("-chdir={}", workdir.display()),
            state: DriverState::Uninitialized,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// init → plan → apply (only if the plan has changes) → output.
    ///
    /// # Errors
    ///
    /// Returns the first failing step as [`TerraformError::StepFailed`], or
    /// an output decoding error.
    pub async fn apply(&mut self) -> Result<ProvisioningResult> {
        self.reporter.step("Initializing Terraform...");
        self.init().await?;

        self.reporter.step("Planning changes...");
        if self.plan().await? {
            self.reporter.step("Applying changes...");
            self.apply_plan().await?;
        } else {
            self.reporter.info("No changes detected");
        }

        self.outputs().await
    }

    /// init → destroy.
    ///
    /// # Errors
    ///
    /// Returns the first failing step as [`TerraformError::StepFailed`].
    pub async fn destroy(&mut self) -> Result<()> {
        self.reporter.step("Initializing Terraform...");
        self.init().await?;

        self.reporter.step("Destroying resources...");
        self.destroy_resources().await
    }

    /// `terraform init`.
    ///
    /// # Errors
    ///
    /// Returns an error if the step is out of order or terraform fails.
    pub async fn init(&mut self) -> Result<()> {
        let output = self.invoke(Step::Init, &[]).await?;
        self.expect_success(Step::Init, &output)?;
        self.state = self.state.advance(Step::Init, false);
        Ok(())
    }

    /// `terraform plan -detailed-exitcode -out=tfplan`. Returns whether the
    /// plan contains changes.
    ///
    /// # Errors
    ///
    /// Returns an error if the step is out of order or terraform fails.
    pub async fn plan(&mut self) -> Result<bool> {
        let out = format!("-out={PLAN_FILE}");
        let output = self
            .invoke(Step::Plan, &["-detailed-exitcode", out.as_str()])
            .await?;
        let Some(changes) = plan_has_changes(output.status.code()) else {
            return Err(self.fail(Step::Plan, &output));
        };
        tracing::info!(changes, "terraform plan finished");
        self.state = self.state.advance(Step::Plan, changes);
        Ok(changes)
    }

    /// `terraform apply tfplan`.
    ///
    /// # Errors
    ///
    /// Returns an error if no plan with changes exists or terraform fails.
    pub async fn apply_plan(&mut self) -> Result<()> {
        let output = self
            .invoke(Step::Apply, &["-auto-approve", PLAN_FILE])
            .await?;
        self.expect_success(Step::Apply, &output)?;
        self.state = self.state.advance(Step::Apply, false);
        Ok(())
    }

    /// `terraform destroy -auto-approve`.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is not initialized or terraform fails.
    pub async fn destroy_resources(&mut self) -> Result<()> {
        let output = self.invoke(Step::Destroy, &["-auto-approve"]).await?;
        self.expect_success(Step::Destroy, &output)?;
        self.state = self.state.advance(Step::Destroy, false);
        Ok(())
    }

    /// `terraform output -json`, decoded into a [`ProvisioningResult`].
    ///
    /// # Errors
    ///
    /// Returns an error if the step is out of order, terraform fails, or the
    /// output document cannot be decoded.
    pub async fn outputs(&mut self) -> Result<ProvisioningResult> {
        let output = self.invoke(Step::Output, &["-json"]).await?;
        self.expect_success(Step::Output, &output)?;
        let decoded = outputs::parse_outputs(&output.stdout).and_then(|map| outputs::extract(&map));
        match decoded {
            Ok(result) => Ok(result),
            Err(e) => {
                self.state = DriverState::Failed;
                Err(e.into())
            }
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────────

    async fn invoke(&mut self, step: Step, extra: &[&str]) -> Result<Output> {
        if !self.state.permits(step) {
            return Err(TerraformError::InvalidTransition {
                step,
                state: self.state,
            }
            .into());
        }

        let mut args = vec![self.chdir.as_str(), step.command()];
        // `output` rejects -input.
        if step == Step::Output {
            args.push("-no-color");
        } else {
            args.extend_from_slice(COMMON_ARGS);
        }
        args.extend_from_slice(extra);

        tracing::debug!(binary = self.binary, ?args, "running terraform {step}");
        match self.runner.run(self.binary, &args).await {
            Ok(output) => {
                if step != Step::Output {
                    tracing::debug!(
                        stdout = %String::from_utf8_lossy(&output.stdout),
                        "terraform {step} output"
                    );
                }
                Ok(output)
            }
            Err(e) => {
                self.state = DriverState::Failed;
                Err(TerraformError::StepFailed {
                    step,
                    detail: format!("{e:#}"),
                }
                .into())
            }
        }
    }

    fn expect_success(&mut self, step: Step, output: &Output) -> Result<()> {
        if output.status.success() {
            Ok(())
        } else {
            Err(self.fail(step, output))
        }
    }

    fn fail(&mut self, step: Step, output: &Output) -> anyhow::Error {
        self.state = DriverState::Failed;
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        let detail = if stderr.is_empty() {
            format!("{}", output.status)
        } else {
            format!("{}\n{stderr}", output.status)
        };
        tracing::debug!(%step, status = %output.status, "terraform step failed");
        TerraformError::StepFailed { step, detail }.into()
    }
}
