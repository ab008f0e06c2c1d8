//! Terraform lifecycle steps and the driver state machine.
//!
//! Pure transition table: the application-layer driver asks
//! [`DriverState::permits`] before every step and records the result with
//! [`DriverState::advance`] or [`DriverState::Failed`].

use std::fmt;

/// One Terraform CLI invocation in the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Init,
    Plan,
    Apply,
    Destroy,
    Output,
}

impl Step {
    /// The Terraform subcommand for this step.
    #[must_use]
    pub fn command(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Plan => "plan",
            Self::Apply => "apply",
            Self::Destroy => "destroy",
            Self::Output => "output",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

/// Where the driver is in the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Uninitialized,
    Initialized,
    Planned { changes: bool },
    Applied,
    Destroyed,
    /// Terminal: a step failed and the driver must not be reused.
    Failed,
}

impl DriverState {
    /// Whether `step` may run from this state.
    #[must_use]
    pub fn permits(self, step: Step) -> bool {
        matches!(
            (self, step),
            (Self::Uninitialized, Step::Init)
                | (Self::Initialized, Step::Plan | Step::Destroy)
                | (Self::Planned { changes: true }, Step::Apply)
                | (Self::Planned { changes: false } | Self::Applied, Step::Output)
        )
    }

    /// State after `step` succeeded. `changes` is only read for `Step::Plan`.
    #[must_use]
    pub fn advance(self, step: Step, changes: bool) -> Self {
        match step {
            Step::Init => Self::Initialized,
            Step::Plan => Self::Planned { changes },
            Step::Apply => Self::Applied,
            Step::Destroy => Self::Destroyed,
            Step::Output => self,
        }
    }
}

impl fmt::Display for DriverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => f.write_str("uninitialized"),
            Self::Initialized => f.write_str("initialized"),
            Self::Planned { changes: true } => f.write_str("planned (changes pending)"),
            Self::Planned { changes: false } => f.write_str("planned (no changes)"),
            Self::Applied => f.write_str("applied"),
            Self::Destroyed => f.write_str("destroyed"),
            Self::Failed => f.write_str("failed"),
        }
    }
}

/// Interpret the exit code of `terraform plan -detailed-exitcode`.
///
/// `0` means no changes, `2` means changes are pending, anything else
/// (including termination by signal) is a failure and yields `None`.
#[must_use]
pub fn plan_has_changes(code: Option<i32>) -> Option<bool> {
    match code {
        Some(0) => Some(false),
        Some(2) => Some(true),
        _ => None,
    }
}
