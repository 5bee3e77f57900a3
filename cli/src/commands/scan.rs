use std::sync::Arc;
use std::time::Instant;

use colored::*;
use sweepr_common::config::Config;
use sweepr_common::registry::ToolRegistry;
use sweepr_common::result::ResultTable;
use sweepr_common::selection::Selection;
use sweepr_common::success;
use sweepr_common::target::Target;
use sweepr_core::locate::PathLocator;
use sweepr_core::orchestrator::ScanEngine;
use sweepr_core::report;
use sweepr_core::runner::{LineSink, ProcessRunner};
use tracing::info;

use crate::commands::ScanArgs;
use crate::terminal::{print, prompt, spinner};

pub async fn scan(args: ScanArgs) -> anyhow::Result<()> {
    let defaults = Config::default();
    let config = Config {
        author: args.author.unwrap_or(defaults.author),
        output_dir: args.output_dir.unwrap_or(defaults.output_dir),
    };
    let registry = ToolRegistry::builtin();

    let target: Target = match args.target {
        Some(target) => target,
        None => prompt::target()?,
    };
    let selection: Selection = match args.scans {
        Some(selection) => selection,
        None => prompt::selection(&registry)?,
    };

    print::header("starting scans");
    info!("Starting scans on {target}");

    let engine = ScanEngine::new(registry, Arc::new(PathLocator), Arc::new(ProcessRunner));
    let sink: LineSink = Arc::new(|tool_name, line| spinner::stream_line(tool_name, line));

    let started = Instant::now();
    spinner::start(format!("Scanning {target}..."));
    let table = engine.run(&target, &selection, Some(sink)).await;
    spinner::finish();
    let table: ResultTable = table?;

    summary(&table, started.elapsed().as_secs_f64());

    let path = report::write_to_dir(&table, &config.output_dir, &config.author)?;
    success!("Report saved as: {}", path.display());
    Ok(())
}

fn summary(table: &ResultTable, elapsed_secs: f64) {
    print::header("scan summary");

    let key_width = table
        .iter()
        .map(|entry| entry.tool_name.len())
        .max()
        .unwrap_or(0);

    for entry in table.iter() {
        let status = entry.status.to_string();
        let badge: ColoredString = if entry.status.is_success() {
            status.green().bold()
        } else {
            status.red().bold()
        };
        print::aligned_line(&entry.tool_name, key_width, &badge);
    }

    let count = format!("{} tools", table.len()).bold().green();
    let took = format!("{elapsed_secs:.2}s").bold().yellow();
    print::centerln(&format!("Completed {count} in {took}"));
}
