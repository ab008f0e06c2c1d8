//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

use crate::domain::lifecycle::{DriverState, Step};

// ── Credential errors ─────────────────────────────────────────────────────────

/// Errors raised while resolving Cato API credentials.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Cato token and account ID are required (via flags or environment)")]
    Missing,
}

// ── Request errors ────────────────────────────────────────────────────────────

/// Operator input that cannot be turned into a valid provisioning request.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Site name must not be empty.")]
    EmptySiteName,

    #[error("Invalid {field}: '{value}' is not an IPv4 address.")]
    InvalidAddress { field: &'static str, value: String },

    #[error("Invalid network range '{0}': expected an IPv4 CIDR such as 10.201.1.0/24.")]
    InvalidNetwork(String),

    #[error("Invalid BGP ASN {0}: must be between 1 and 4294967295.")]
    InvalidAsn(u32),

    #[error("The s3 state backend needs a bucket: pass --state-conn or set TF_STATE_S3_BUCKET.")]
    MissingBucket,
}

// ── Terraform errors ──────────────────────────────────────────────────────────

/// Failures of the Terraform lifecycle.
#[derive(Debug, Error)]
pub enum TerraformError {
    #[error("terraform {step} failed: {detail}")]
    StepFailed { step: Step, detail: String },

    #[error("terraform {step} is not allowed while the driver is {state}")]
    InvalidTransition { step: Step, state: DriverState },
}

// ── Output errors ─────────────────────────────────────────────────────────────

/// Errors decoding `terraform output -json`.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("terraform output is not a valid JSON document")]
    InvalidDocument(#[source] serde_json::Error),

    #[error("terraform output '{name}' has an unexpected shape")]
    Malformed {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}
