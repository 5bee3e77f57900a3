pub mod scan;
pub mod tools;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use sweepr_common::selection::Selection;
use sweepr_common::target::Target;

#[derive(Parser)]
#[command(name = "sweepr")]
#[command(version)]
#[command(about = "Runs network reconnaissance tools concurrently and builds an HTML report.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the tool catalog
    #[command(alias = "t")]
    Tools,
    /// Run scans against a target (prompts for anything omitted)
    #[command(alias = "s")]
    Scan(ScanArgs),
}

impl Default for Commands {
    /// Bare `sweepr` behaves like `sweepr scan` with prompts.
    fn default() -> Self {
        Commands::Scan(ScanArgs::default())
    }
}

#[derive(Args, Default)]
pub struct ScanArgs {
    /// IP or network range handed to every selected tool
    pub target: Option<Target>,

    /// Comma-separated catalog indices, 0 runs everything
    #[arg(short, long)]
    pub scans: Option<Selection>,

    /// Name stamped into the report header
    #[arg(long)]
    pub author: Option<String>,

    /// Directory the report is written into
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
