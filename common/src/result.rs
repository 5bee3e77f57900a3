//! # Scan Outcomes
//!
//! One [`ScanResult`] is produced per invoked tool and collected into a
//! [`ResultTable`], which the report is rendered from. Results are
//! written once, by the task that ran the tool, and never mutated.

use std::collections::BTreeMap;
use std::fmt;

/// Final state of one tool invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScanStatus {
    /// Process ran and exited with code 0.
    Success,
    /// Process ran and exited with the given nonzero code.
    Failed(i32),
    /// Executable could not be located; nothing was spawned.
    NotInstalled,
    /// Spawning or reading the process failed at the OS level.
    Error(String),
}

impl ScanStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, ScanStatus::Success)
    }
}

impl fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanStatus::Success => f.write_str("Success"),
            ScanStatus::Failed(code) => write!(f, "Failed (Code: {code})"),
            ScanStatus::NotInstalled => f.write_str("Not Installed"),
            ScanStatus::Error(message) => write!(f, "Error: {message}"),
        }
    }
}

/// Everything captured about one tool run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanResult {
    pub tool_name: String,
    /// Fully substituted command line, as displayed.
    pub command: String,
    /// Combined stdout/stderr, line order preserved per stream.
    pub output: String,
    pub status: ScanStatus,
}

/// Maps tool name to its result.
///
/// Tool names are unique by construction of the catalog, so each run
/// contributes exactly one entry. Iteration is name-sorted, which keeps
/// report rendering deterministic.
#[derive(Clone, Debug, Default)]
pub struct ResultTable {
    entries: BTreeMap<String, ScanResult>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, result: ScanResult) {
        self.entries.insert(result.tool_name.clone(), result);
    }

    pub fn get(&self, tool_name: &str) -> Option<&ScanResult> {
        self.entries.get(tool_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScanResult> {
        self.entries.values()
    }
}
