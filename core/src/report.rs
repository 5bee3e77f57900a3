//! Static HTML report rendering.
//!
//! The report is a single self-contained document: a header with the
//! generation timestamp, one section per table entry, and a footer.
//! Rendering depends only on the table contents and the metadata, so
//! identical inputs produce byte-identical documents.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Local};
use sweepr_common::result::ResultTable;

/// Values stamped into the report header.
#[derive(Clone, Debug)]
pub struct ReportMeta {
    /// Human-readable generation time, `YYYY-MM-DD HH:MM:SS`.
    pub generated_at: String,
    pub author: String,
}

impl ReportMeta {
    pub fn at(now: DateTime<Local>, author: &str) -> Self {
        Self {
            generated_at: now.format("%Y-%m-%d %H:%M:%S").to_string(),
            author: author.to_string(),
        }
    }
}

/// Report filename for a run finishing at `now`, second granularity.
pub fn filename_at(now: DateTime<Local>) -> String {
    format!("scan_report_{}.html", now.format("%Y%m%d_%H%M%S"))
}

/// Renders the report, writes it into `dir` (overwriting any previous
/// file of the same name), and returns the full path.
pub fn write_to_dir(table: &ResultTable, dir: &Path, author: &str) -> anyhow::Result<PathBuf> {
    let now = Local::now();
    let path = dir.join(filename_at(now));
    let meta = ReportMeta::at(now, author);

    fs::write(&path, render(table, &meta))
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    Ok(path)
}

/// Renders the full document.
pub fn render(table: &ResultTable, meta: &ReportMeta) -> String {
    let mut html = String::with_capacity(4096 + table.len() * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str("<title>Sweepr Scan Report</title>\n");
    html.push_str("<style>\n");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n<div class=\"container\">\n");

    html.push_str("  <div class=\"header\">\n    <h1>Sweepr Scan Report</h1>\n");
    html.push_str(&format!(
        "    <p>Generated on: {}</p>\n    <p>Author: {}</p>\n  </div>\n",
        escape(&meta.generated_at),
        escape(&meta.author)
    ));

    for entry in table.iter() {
        let badge = if entry.status.is_success() {
            "success"
        } else {
            "failed"
        };

        html.push_str("  <div class=\"scan-section\">\n");
        html.push_str("    <div class=\"scan-header\">\n");
        html.push_str(&format!("      <h2>{}</h2>\n", escape(&entry.tool_name)));
        html.push_str(&format!(
            "      <span class=\"status {badge}\">{}</span>\n",
            escape(&entry.status.to_string())
        ));
        html.push_str("    </div>\n");
        html.push_str(&format!(
            "    <p>Command: <span class=\"command\">{}</span></p>\n",
            escape(&entry.command)
        ));
        html.push_str(&format!("    <pre>{}</pre>\n", escape(&entry.output)));
        html.push_str("  </div>\n");
    }

    html.push_str("  <div class=\"footer\">\n    <p>Report generated by sweepr</p>\n  </div>\n");
    html.push_str("</div>\n</body>\n</html>\n");

    html
}

/// Scanner output is untrusted text; everything user- or tool-supplied
/// is escaped before it lands in markup.
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

const STYLE: &str = "\
body {
  font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
  margin: 0;
  padding: 20px;
  background-color: #f5f5f5;
  color: #333;
}
.container {
  max-width: 1200px;
  margin: 0 auto;
  background: white;
  padding: 20px;
  box-shadow: 0 0 10px rgba(0,0,0,0.1);
  border-radius: 5px;
}
.header {
  background: linear-gradient(135deg, #4CAF50, #45a049);
  color: white;
  padding: 20px;
  border-radius: 5px 5px 0 0;
  margin-bottom: 20px;
}
.scan-section {
  margin-bottom: 25px;
  border-bottom: 1px solid #eee;
  padding-bottom: 15px;
}
.scan-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
}
.status {
  padding: 3px 10px;
  border-radius: 3px;
  font-weight: bold;
}
.success {
  background-color: #dff0d8;
  color: #3c763d;
}
.failed {
  background-color: #f2dede;
  color: #a94442;
}
pre {
  background-color: #f8f9fa;
  padding: 15px;
  border-radius: 4px;
  overflow-x: auto;
  font-family: Consolas, Monaco, 'Andale Mono', monospace;
}
.command {
  font-family: monospace;
  color: #31708f;
  background-color: #d9edf7;
  padding: 2px 5px;
  border-radius: 3px;
}
.footer {
  margin-top: 30px;
  text-align: center;
  color: #777;
  font-size: 12px;
}
";
