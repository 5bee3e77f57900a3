use colored::*;
use sweepr_common::registry::ToolRegistry;
use tracing::info;

pub const TOTAL_WIDTH: usize = 64;

/// Events with this target bypass the `[+]`-style symbol prefix.
pub const RAW_TARGET: &str = "sweepr::raw";

const BANNER_0: &str = r#"
   ███████╗██╗    ██╗███████╗███████╗██████╗ ██████╗
   ██╔════╝██║    ██║██╔════╝██╔════╝██╔══██╗██╔══██╗
   ███████╗██║ █╗ ██║█████╗  █████╗  ██████╔╝██████╔╝
   ╚════██║██║███╗██║██╔══╝  ██╔══╝  ██╔═══╝ ██╔══██╗
   ███████║╚███╔███╔╝███████╗███████╗██║     ██║  ██║
   ╚══════╝ ╚══╝╚══╝ ╚══════╝╚══════╝╚═╝     ╚═╝  ╚═╝
"#;

const BANNER_1: &str = r#"
      _____      _____ ___ _ __  _ __
    / __\ \ /\ / / _ \/ _ \ '_ \| '__|
    \__ \\ V  V /  __/  __/ |_) | |
    |___/ \_/\_/ \___|\___| .__/|_|
                          |_|
"#;

pub fn print(msg: &str) {
    info!(target: "sweepr::raw", "{msg}");
}

pub fn banner() {
    let text_content: String = format!("⟦ SWEEPR v{} ⟧", env!("CARGO_PKG_VERSION"));
    let text_width: usize = console::measure_text_width(&text_content);
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═"
        .repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2)
        .bright_black();
    print(&format!("{}{}{}", sep, text, sep));

    match rand::random_range(0..=1) {
        0 => print(&format!("{}", BANNER_0.green())),
        _ => print(&format!("{}", BANNER_1.truecolor(255, 165, 0))),
    }
}

pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

/// Lists every catalog entry plus the "all" sentinel.
pub fn catalog(registry: &ToolRegistry) {
    for spec in registry.iter() {
        catalog_line(spec.index, &spec.name, &spec.description);
    }
    print("");
    catalog_line(0, "ALL", "Run every tool in the catalog");
}

pub fn catalog_line(index: usize, name: &str, description: &str) {
    let idx: ColoredString = format!("{:>2}.", index).bold();
    print(&format!(
        "  {} {} {} {}",
        idx,
        name.bright_green(),
        "-".bright_black(),
        description
    ));
}

pub fn aligned_line(key: &str, key_width: usize, value: &ColoredString) {
    let dots: ColoredString = "."
        .repeat(key_width.saturating_sub(key.len()) + 2)
        .bright_black();
    print(&format!("  {}{} {}", key.bold(), dots, value));
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}", space, msg));
}
