mod cli;

use std::io::{self, Write};

use clap::Parser;
use tracing::{debug, error, info};

use rootline_demo::{Result, run, select, setup_logging, to_json, to_text};

use crate::cli::{Cli, Format};

fn main() {
    if let Err(e) = run_app() {
        error!("run failed: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;
    debug!("parsed arguments: {cli:?}");

    let settings = cli.settings()?;
    let jobs = select(&cli.functions, &cli.methods);
    info!(jobs = jobs.len(), "starting run");

    let records = run(&settings, &jobs)?;

    let output = match cli.format {
        Format::Text => to_text(&records),
        Format::Json => to_json(&records)? + "\n",
    };
    io::stdout().lock().write_all(output.as_bytes())?;

    Ok(())
}
