//! Child-process execution with live output streaming.
//!
//! One runner invocation covers the whole lifecycle of a single tool:
//! spawn, stream output line by line while the process runs, wait for
//! exit, and fold everything into one [`ScanResult`]. Failures are
//! recorded in the result, never propagated; a broken tool must not
//! take its siblings down.

use std::process::Stdio;
use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use sweepr_common::registry::ToolCommand;
use sweepr_common::result::{ScanResult, ScanStatus};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;

/// Callback invoked for every output line as it is read, while the
/// child is still running. Arguments are the tool name and the line.
pub type LineSink = Arc<dyn Fn(&str, &str) + Send + Sync>;

/// Runs one fully substituted tool command to completion.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(
        &self,
        tool_name: &str,
        command: &ToolCommand,
        sink: Option<LineSink>,
    ) -> ScanResult;
}

/// Spawns the command directly from its argument vector (no shell) and
/// merges stdout and stderr into a single ordered buffer.
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(
        &self,
        tool_name: &str,
        command: &ToolCommand,
        sink: Option<LineSink>,
    ) -> ScanResult {
        let display = command.display_line();

        match capture(tool_name, command, sink.as_ref()).await {
            Ok((output, status)) => ScanResult {
                tool_name: tool_name.to_string(),
                command: display,
                output,
                status,
            },
            Err(err) => {
                let message = format!("Error: {err:#}");
                ScanResult {
                    tool_name: tool_name.to_string(),
                    command: display,
                    output: message.clone(),
                    status: ScanStatus::Error(message),
                }
            }
        }
    }
}

async fn capture(
    tool_name: &str,
    command: &ToolCommand,
    sink: Option<&LineSink>,
) -> anyhow::Result<(String, ScanStatus)> {
    let mut child = Command::new(&command.program)
        .args(&command.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("failed to spawn '{}'", command.program))?;

    let stdout = child.stdout.take().context("child stdout was not piped")?;
    let stderr = child.stderr.take().context("child stderr was not piped")?;
    let mut out_lines = BufReader::new(stdout).lines();
    let mut err_lines = BufReader::new(stderr).lines();

    let mut buffer = String::new();
    let mut out_open = true;
    let mut err_open = true;

    // Drain both pipes before waiting on the child; waiting first can
    // deadlock once a pipe buffer fills up.
    while out_open || err_open {
        let line = tokio::select! {
            line = out_lines.next_line(), if out_open => {
                match line.context("failed to read child stdout")? {
                    Some(line) => Some(line),
                    None => {
                        out_open = false;
                        None
                    }
                }
            }
            line = err_lines.next_line(), if err_open => {
                match line.context("failed to read child stderr")? {
                    Some(line) => Some(line),
                    None => {
                        err_open = false;
                        None
                    }
                }
            }
        };

        if let Some(line) = line {
            if let Some(sink) = sink {
                sink(tool_name, line.trim_end());
            }
            buffer.push_str(&line);
            buffer.push('\n');
        }
    }

    let exit = child
        .wait()
        .await
        .with_context(|| format!("failed to wait for '{}'", command.program))?;

    let status = match exit.code() {
        Some(0) => ScanStatus::Success,
        Some(code) => ScanStatus::Failed(code),
        // No exit code means the child was killed by a signal.
        None => ScanStatus::Error(String::from("terminated by signal")),
    };

    Ok((buffer, status))
}
