//! Unit tests for the provision service and scratch directory lifecycle.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::Path;

use cato_terraform::application::services::provision::{Operation, Outcome, ProvisionDeps};
use cato_terraform::commands::provision::execute;
use cato_terraform::infra::fs::LocalFs;

use crate::helpers::{OUTPUTS_JSON, code_output, err_output, ok_output, sample_request};
use crate::mocks::{FailingWriter, RecordingReporter, ScriptedRunner};

fn is_empty_dir(path: &Path) -> bool {
    std::fs::read_dir(path).unwrap().next().is_none()
}

#[tokio::test]
async fn test_apply_writes_artifacts_before_init() {
    let parent = tempfile::tempdir().unwrap();
    let runner = ScriptedRunner::new()
        .respond("plan", code_output(2, b""))
        .respond("output", ok_output(OUTPUTS_JSON));
    let reporter = RecordingReporter::new();
    let deps = ProvisionDeps {
        runner: &runner,
        writer: &LocalFs,
        reporter: &reporter,
        binary: "terraform",
    };

    let outcome = execute(&sample_request(), Operation::Apply, &deps, Some(parent.path()))
        .await
        .expect("apply should succeed");

    assert_eq!(
        runner.files_at_init(),
        ["main.tf", "terraform.tfvars", "variables.tf"]
    );
    match outcome {
        Outcome::Applied(result) => assert_eq!(result.site_id, "123456"),
        Outcome::Destroyed => panic!("expected Applied, got Destroyed"),
    }
}

#[tokio::test]
async fn test_working_directory_removed_after_success() {
    let parent = tempfile::tempdir().unwrap();
    let runner = ScriptedRunner::new().respond("output", ok_output(OUTPUTS_JSON));
    let reporter = RecordingReporter::new();
    let deps = ProvisionDeps {
        runner: &runner,
        writer: &LocalFs,
        reporter: &reporter,
        binary: "terraform",
    };

    execute(&sample_request(), Operation::Apply, &deps, Some(parent.path()))
        .await
        .unwrap();

    let workdir = runner.calls()[0].chdir().unwrap();
    assert!(workdir.starts_with(parent.path()));
    assert!(!workdir.exists());
    assert!(is_empty_dir(parent.path()));
}

#[tokio::test]
async fn test_working_directory_removed_after_failure() {
    let parent = tempfile::tempdir().unwrap();
    let runner = ScriptedRunner::new().respond("plan", err_output(1, b"bad credentials"));
    let reporter = RecordingReporter::new();
    let deps = ProvisionDeps {
        runner: &runner,
        writer: &LocalFs,
        reporter: &reporter,
        binary: "terraform",
    };

    let err = execute(&sample_request(), Operation::Apply, &deps, Some(parent.path()))
        .await
        .unwrap_err();

    assert!(format!("{err:#}").contains("bad credentials"));
    assert!(is_empty_dir(parent.path()));
}

#[tokio::test]
async fn test_write_failure_runs_no_terraform() {
    let parent = tempfile::tempdir().unwrap();
    let runner = ScriptedRunner::new();
    let reporter = RecordingReporter::new();
    let deps = ProvisionDeps {
        runner: &runner,
        writer: &FailingWriter,
        reporter: &reporter,
        binary: "terraform",
    };

    let err = execute(&sample_request(), Operation::Apply, &deps, Some(parent.path()))
        .await
        .unwrap_err();

    assert!(format!("{err:#}").contains("generating terraform files"));
    assert!(runner.calls().is_empty());
    assert!(is_empty_dir(parent.path()));
}

#[tokio::test]
async fn test_destroy_outcome() {
    let parent = tempfile::tempdir().unwrap();
    let runner = ScriptedRunner::new();
    let reporter = RecordingReporter::new();
    let deps = ProvisionDeps {
        runner: &runner,
        writer: &LocalFs,
        reporter: &reporter,
        binary: "terraform",
    };

    let outcome = execute(&sample_request(), Operation::Destroy, &deps, Some(parent.path()))
        .await
        .unwrap();

    assert_eq!(outcome, Outcome::Destroyed);
    assert_eq!(runner.subcommands(), ["init", "destroy"]);
    assert!(is_empty_dir(parent.path()));
}
