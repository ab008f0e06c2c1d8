//! `TerminalReporter`: presentation-layer implementation of `ProgressReporter`.
//!
//! Wraps `&OutputContext` and implements the `application::ports::ProgressReporter`
//! trait so application services can emit progress events without depending on
//! any presentation type directly.
//!
//! On a TTY each step runs under a spinner that is ticked off when the next
//! step starts; otherwise steps are plain `→` lines.

use std::cell::RefCell;

use indicatif::ProgressBar;
use owo_colors::OwoColorize as _;

use crate::application::ports::ProgressReporter;
use crate::output::{OutputContext, progress};

/// Terminal progress reporter that wraps an `OutputContext`.
///
/// - `step()` prints `"  → {message}"` (suppressed when `ctx.quiet`)
/// - `info()` prints `"    {message}"` (suppressed when `ctx.quiet`)
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
    active: RefCell<Option<ProgressBar>>,
}

impl<'a> TerminalReporter<'a> {
    /// Create a new `TerminalReporter` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self {
            ctx,
            active: RefCell::new(None),
        }
    }

    /// Tick off the running step, if any. Call once the last step succeeded.
    pub fn complete(&self) {
        self.finish_active();
    }

    fn finish_active(&self) {
        if let Some(pb) = self.active.borrow_mut().take() {
            progress::finish_ok(&pb, self.ctx.styles.success);
        }
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    fn step(&self, message: &str) {
        if self.ctx.quiet {
            return;
        }
        self.finish_active();
        if self.ctx.show_progress() {
            *self.active.borrow_mut() = Some(progress::spinner(message));
        } else {
            println!("  {} {message}", "→".style(self.ctx.styles.step));
        }
    }

    fn info(&self, message: &str) {
        if self.ctx.quiet {
            return;
        }
        self.finish_active();
        println!("    {}", message.style(self.ctx.styles.note));
    }
}

impl Drop for TerminalReporter<'_> {
    fn drop(&mut self) {
        // A spinner still running here belongs to a step that failed.
        if let Some(pb) = self.active.get_mut().take() {
            progress::finish_failed(&pb, self.ctx.styles.failure);
        }
    }
}
