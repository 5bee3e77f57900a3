#![cfg(test)]
//! End-to-end runs of the scan engine against real child processes.
//!
//! The catalog used here points at coreutils so the tests hold on any
//! machine with a POSIX userland, without touching the network.

use std::str::FromStr;
use std::sync::Arc;

use sweepr_common::registry::{ToolRegistry, ToolSpec};
use sweepr_common::result::ScanStatus;
use sweepr_common::selection::Selection;
use sweepr_common::target::Target;
use sweepr_core::locate::PathLocator;
use sweepr_core::orchestrator::ScanEngine;
use sweepr_core::report;
use sweepr_core::runner::ProcessRunner;

fn coreutils_registry() -> ToolRegistry {
    ToolRegistry::new(vec![
        ToolSpec::new(1, "Echo Probe", "Prints the target", "echo probing {target}"),
        ToolSpec::new(2, "Exit Probe", "Always exits nonzero", "false"),
        ToolSpec::new(
            3,
            "Ghost Probe",
            "Executable that does not exist",
            "sweepr-test-no-such-tool {target}",
        ),
    ])
}

fn engine() -> ScanEngine {
    ScanEngine::new(
        coreutils_registry(),
        Arc::new(PathLocator),
        Arc::new(ProcessRunner),
    )
}

#[tokio::test]
async fn all_sentinel_covers_the_whole_catalog() {
    let target = Target::from_str("127.0.0.1").unwrap();
    let selection = Selection::from_str("0").unwrap();

    let table = engine().run(&target, &selection, None).await.unwrap();

    assert_eq!(table.len(), 3);

    let echo = table.get("Echo Probe").unwrap();
    assert_eq!(echo.status, ScanStatus::Success);
    assert_eq!(echo.command, "echo probing 127.0.0.1");
    assert_eq!(echo.output, "probing 127.0.0.1\n");

    let exit = table.get("Exit Probe").unwrap();
    assert_eq!(exit.status, ScanStatus::Failed(1));
    assert_eq!(exit.status.to_string(), "Failed (Code: 1)");

    let ghost = table.get("Ghost Probe").unwrap();
    assert_eq!(ghost.status, ScanStatus::NotInstalled);
    assert!(ghost.output.contains("is not installed"));
}

#[tokio::test]
async fn single_selection_yields_a_single_entry() {
    let target = Target::from_str("127.0.0.1").unwrap();
    let selection = Selection::from_str("1").unwrap();

    let table = engine().run(&target, &selection, None).await.unwrap();

    assert_eq!(table.len(), 1);
    assert!(table.get("Echo Probe").unwrap().status.is_success());
    assert!(table.get("Exit Probe").is_none());
}

#[tokio::test]
async fn failed_and_missing_tools_do_not_abort_siblings() {
    let target = Target::from_str("10.0.0.0/24").unwrap();
    let selection = Selection::from_str("1,2,3").unwrap();

    let table = engine().run(&target, &selection, None).await.unwrap();

    // One entry each, and the healthy tool still completed.
    assert_eq!(table.len(), 3);
    assert!(table.get("Echo Probe").unwrap().status.is_success());
    assert_eq!(table.get("Exit Probe").unwrap().status, ScanStatus::Failed(1));
    assert_eq!(
        table.get("Ghost Probe").unwrap().status,
        ScanStatus::NotInstalled
    );
}

#[tokio::test]
async fn report_written_from_a_real_run() {
    let target = Target::from_str("127.0.0.1").unwrap();
    let selection = Selection::from_str("0").unwrap();
    let table = engine().run(&target, &selection, None).await.unwrap();

    let dir = std::env::temp_dir();
    let path = report::write_to_dir(&table, &dir, "integration").unwrap();

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Echo Probe"));
    assert!(html.contains("probing 127.0.0.1"));
    assert!(html.contains("Failed (Code: 1)"));
    assert!(html.contains("Not Installed"));

    let _ = std::fs::remove_file(path);
}
