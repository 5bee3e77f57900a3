//! Scan execution for sweepr.
//!
//! The central abstraction is the [`orchestrator::ScanEngine`], which
//! expands a selection against the catalog, checks which executables
//! are actually present, runs every available tool as its own
//! concurrent task, and hands the completed result table to the
//! [`report`] module.
//!
//! High-level code depends on the [`locate::ToolLocator`] and
//! [`runner::CommandRunner`] traits rather than the concrete
//! implementations, so orchestration can be exercised without spawning
//! real scanners.

pub mod locate;
pub mod orchestrator;
pub mod report;
pub mod runner;
