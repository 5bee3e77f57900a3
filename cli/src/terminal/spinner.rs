use std::io;
use std::sync::Mutex;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

static SPINNER: Mutex<Option<ProgressBar>> = Mutex::new(None);

/// Starts the run spinner shown while scans execute.
pub fn start(message: String) {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap()
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]);

    pb.set_style(style);
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));

    *SPINNER.lock().unwrap() = Some(pb);
}

pub fn finish() {
    if let Some(pb) = SPINNER.lock().unwrap().take() {
        pb.finish_and_clear();
    }
}

/// Surfaces one live output line from a running tool.
pub fn stream_line(tool_name: &str, line: &str) {
    let tag: ColoredString = format!("[{tool_name}]").bright_black();
    println_over(&format!("{} {}", tag, line.green()));
}

/// Prints above the spinner when it is running, plainly otherwise.
pub fn println_over(msg: &str) {
    match SPINNER.lock().unwrap().as_ref() {
        Some(pb) => pb.println(msg),
        None => println!("{msg}"),
    }
}

/// Routes subscriber output through [`println_over`] so log lines and
/// the spinner share the terminal cleanly.
pub struct SpinnerWriter;

impl io::Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let msg = String::from_utf8_lossy(buf);
        println_over(msg.trim_end());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
