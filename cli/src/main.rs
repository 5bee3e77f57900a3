mod commands;
mod terminal;

use commands::{CommandLine, Commands, scan, tools};
use sweepr_common::fail;
use terminal::{logging, print};

#[tokio::main]
async fn main() {
    let commands = CommandLine::parse_args();

    logging::init();
    print::banner();

    if !is_root::is_root() {
        tracing::warn!("Some scans may require root privileges.");
    }

    // A terminal break aborts the whole run; in-flight children are not
    // waited for.
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            fail!("Scan interrupted by user.");
            std::process::exit(1);
        }
    });

    let outcome = match commands.command.unwrap_or_default() {
        Commands::Tools => {
            tools::tools();
            Ok(())
        }
        Commands::Scan(args) => scan::scan(args).await,
    };

    if let Err(err) = outcome {
        fail!("Unexpected error: {err:#}");
        std::process::exit(1);
    }
}
