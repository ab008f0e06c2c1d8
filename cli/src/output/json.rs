//! JSON output helpers for `--json`.

use anyhow::{Context, Result};

use crate::application::services::provision::Outcome;

/// Renders command outcomes as pretty-printed JSON on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    /// Print `outcome` as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_outcome(&self, outcome: &Outcome, site_name: &str) -> Result<()> {
        println!("{}", format_outcome(outcome, site_name)?);
        Ok(())
    }
}

/// Format `outcome` as a JSON document.
///
/// Apply:
/// ```json
/// { "site_id": "...", "site_name": "...", "bgp_peer_id": "...", "bgp_peer_name": "..." }
/// ```
///
/// Destroy:
/// ```json
/// { "destroyed": true, "site_name": "..." }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_outcome(outcome: &Outcome, site_name: &str) -> Result<String> {
    let value = match outcome {
        Outcome::Applied(result) => serde_json::to_value(result).context("serializing result")?,
        Outcome::Destroyed => serde_json::json!({
            "destroyed": true,
            "site_name": site_name,
        }),
    };
    serde_json::to_string_pretty(&value).context("JSON serialization failed")
}
