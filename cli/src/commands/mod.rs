//! Command implementations

pub mod provision;

pub use provision::ProvisionArgs;
