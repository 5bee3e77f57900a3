//! Fork-join scan execution.
//!
//! The engine launches one task per selected, available tool and joins
//! them all before returning, so the caller never sees a partially
//! populated result table. Tools that are not installed are recorded
//! synchronously; nothing is spawned for them.

use std::sync::Arc;

use sweepr_common::registry::ToolRegistry;
use sweepr_common::result::{ResultTable, ScanResult, ScanStatus};
use sweepr_common::selection::Selection;
use sweepr_common::target::Target;
use tracing::{info, warn};

use crate::locate::ToolLocator;
use crate::runner::{CommandRunner, LineSink};

/// Drives one scan run end to end.
pub struct ScanEngine {
    registry: ToolRegistry,
    locator: Arc<dyn ToolLocator>,
    runner: Arc<dyn CommandRunner>,
}

impl ScanEngine {
    pub fn new(
        registry: ToolRegistry,
        locator: Arc<dyn ToolLocator>,
        runner: Arc<dyn CommandRunner>,
    ) -> Self {
        Self {
            registry,
            locator,
            runner,
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Runs every selected tool against `target` and returns the
    /// completed table: exactly one entry per selected tool.
    ///
    /// Per-tool failures (missing executable, nonzero exit, spawn
    /// errors) land in the table; only selection expansion can fail the
    /// run itself. There is no timeout: a hung tool blocks the join.
    pub async fn run(
        &self,
        target: &Target,
        selection: &Selection,
        sink: Option<LineSink>,
    ) -> anyhow::Result<ResultTable> {
        let specs = selection.expand(&self.registry)?;

        let mut table = ResultTable::new();
        let mut handles = Vec::new();

        for spec in specs {
            let command = spec.command_for(target);

            if !self.locator.locate(&command.program) {
                warn!("Skipping {}: '{}' is not installed", spec.name, command.program);
                table.insert(ScanResult {
                    tool_name: spec.name.clone(),
                    command: command.display_line(),
                    output: format!(
                        "{} is not installed (no '{}' on the search path)",
                        spec.name, command.program
                    ),
                    status: ScanStatus::NotInstalled,
                });
                continue;
            }

            info!("Running {}...", spec.name);
            let runner = Arc::clone(&self.runner);
            let sink = sink.clone();
            let tool_name = spec.name.clone();

            handles.push((
                spec.name.clone(),
                command.display_line(),
                tokio::spawn(async move { runner.run(&tool_name, &command, sink).await }),
            ));
        }

        for (tool_name, command, handle) in handles {
            match handle.await {
                Ok(result) => table.insert(result),
                // A panicked task still gets its table entry; siblings
                // are unaffected.
                Err(err) => {
                    warn!("Task for {tool_name} aborted: {err}");
                    let message = format!("Error: scan task aborted: {err}");
                    table.insert(ScanResult {
                        tool_name,
                        command,
                        output: message.clone(),
                        status: ScanStatus::Error(message),
                    });
                }
            }
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::str::FromStr;
    use std::sync::Mutex;
    use sweepr_common::registry::{ToolCommand, ToolSpec};

    struct StubLocator {
        available: bool,
    }

    impl ToolLocator for StubLocator {
        fn locate(&self, _program: &str) -> bool {
            self.available
        }
    }

    /// Records every invocation and reports success with a canned line.
    struct RecordingRunner {
        calls: Mutex<Vec<String>>,
    }

    impl RecordingRunner {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CommandRunner for RecordingRunner {
        async fn run(
            &self,
            tool_name: &str,
            command: &ToolCommand,
            _sink: Option<LineSink>,
        ) -> ScanResult {
            self.calls.lock().unwrap().push(tool_name.to_string());
            ScanResult {
                tool_name: tool_name.to_string(),
                command: command.display_line(),
                output: String::from("Host is up\n"),
                status: ScanStatus::Success,
            }
        }
    }

    fn registry() -> ToolRegistry {
        ToolRegistry::new(vec![
            ToolSpec::new(1, "Alpha", "first", "alpha-scan {target}"),
            ToolSpec::new(2, "Bravo", "second", "bravo-scan -x {target}"),
            ToolSpec::new(3, "Charlie", "third", "charlie-scan {target}"),
        ])
    }

    fn engine(available: bool, runner: Arc<RecordingRunner>) -> ScanEngine {
        ScanEngine::new(registry(), Arc::new(StubLocator { available }), runner)
    }

    #[tokio::test]
    async fn sentinel_yields_one_entry_per_catalog_tool() {
        let runner = Arc::new(RecordingRunner::new());
        let engine = engine(true, Arc::clone(&runner));
        let target = Target::from_str("127.0.0.1").unwrap();

        let table = engine.run(&target, &Selection::all(), None).await.unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(runner.calls.lock().unwrap().len(), 3);
        for name in ["Alpha", "Bravo", "Charlie"] {
            assert!(table.get(name).unwrap().status.is_success());
        }
    }

    #[tokio::test]
    async fn subset_selection_runs_only_those_tools() {
        let runner = Arc::new(RecordingRunner::new());
        let engine = engine(true, Arc::clone(&runner));
        let target = Target::from_str("127.0.0.1").unwrap();
        let selection = Selection::from_str("2").unwrap();

        let table = engine.run(&target, &selection, None).await.unwrap();

        assert_eq!(table.len(), 1);
        let entry = table.get("Bravo").unwrap();
        assert_eq!(entry.command, "bravo-scan -x 127.0.0.1");
        assert_eq!(entry.output, "Host is up\n");
    }

    #[tokio::test]
    async fn unavailable_tools_are_recorded_without_spawning() {
        let runner = Arc::new(RecordingRunner::new());
        let engine = engine(false, Arc::clone(&runner));
        let target = Target::from_str("10.0.0.1").unwrap();

        let table = engine.run(&target, &Selection::all(), None).await.unwrap();

        assert_eq!(table.len(), 3);
        assert!(runner.calls.lock().unwrap().is_empty());
        for entry in table.iter() {
            assert_eq!(entry.status, ScanStatus::NotInstalled);
            assert!(entry.output.contains("is not installed"));
        }
    }

    #[tokio::test]
    async fn unknown_index_fails_the_run() {
        let runner = Arc::new(RecordingRunner::new());
        let engine = engine(true, runner);
        let target = Target::from_str("127.0.0.1").unwrap();
        let selection = Selection::from_str("9").unwrap();

        assert!(engine.run(&target, &selection, None).await.is_err());
    }
}
