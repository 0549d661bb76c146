// src/main.rs
use anyhow::Result;
use clap::Parser;
use tracing::debug;

use osint_utils::app::{App, Command, ScanCommand};
use osint_utils::logging;

#[derive(Parser)]
#[command(name = "osint-scan")]
#[command(about = "OSINT scan stub")]
struct Args {
    /// Target to scan
    #[arg(long, short = 't')]
    target: String,

    /// Enable debug diagnostics on standard error
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init(args.verbose);
    debug!("Starting stub scan for target '{}'", args.target);

    let app = App::new();
    let command = Command::Scan(ScanCommand::Run {
        target: args.target,
    });

    app.run_command(&command, &mut std::io::stdout())?;

    Ok(())
}
