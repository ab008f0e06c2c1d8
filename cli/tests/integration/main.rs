//! Integration tests for cato-terraform
//!
//! These tests spawn the actual binary and test end-to-end behavior against
//! a fake `terraform` script. They are slower and should be run separately
//! from unit tests.
