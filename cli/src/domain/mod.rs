//! Domain layer: pure types and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod artifacts;
pub mod error;
pub mod lifecycle;
pub mod outputs;
pub mod request;

pub use artifacts::{Artifacts, render};
pub use error::{CredentialError, OutputError, RequestError, TerraformError};
pub use lifecycle::{DriverState, Step};
pub use outputs::{OutputMap, ProvisioningResult};
pub use request::{Credentials, ProvisioningRequest, RequestParams, StateBackend};
