//! Spinners for long-running terraform steps.

#![allow(clippy::expect_used)] // Templates are compile-time constants

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize as _, Style};

const RUNNING: &str = "  {spinner} {msg}";
const SETTLED: &str = "  {prefix} {msg}";
const TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "];

/// Start a spinner labelled `msg`. Terraform steps can run for minutes, so
/// it ticks on its own.
#[must_use]
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(TICKS)
            .template(RUNNING)
            .expect("valid template"),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Replace the spinner with a `✓`, keeping the step label.
pub fn finish_ok(pb: &ProgressBar, style: Style) {
    settle(pb, "✓", style);
}

/// Replace the spinner with a `✗`, keeping the step label.
pub fn finish_failed(pb: &ProgressBar, style: Style) {
    settle(pb, "✗", style);
}

fn settle(pb: &ProgressBar, mark: &str, style: Style) {
    pb.set_style(ProgressStyle::default_spinner().template(SETTLED).expect("valid template"));
    pb.set_prefix(mark.style(style).to_string());
    pb.finish();
}
