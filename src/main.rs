//! bikeshare CLI entry point.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bikeshare::{BikeshareError, Config, Console};

/// Explore US bikeshare trip data interactively.
#[derive(Parser, Debug)]
#[command(name = "bikeshare")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(long = "data-dir", value_name = "DIR", default_value = ".")]
    data_dir: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with_writer(io::stderr)
        .init();

    match explore(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn explore(args: &Args) -> Result<()> {
    let config = Config::new(&args.data_dir);
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());

    match bikeshare::run(&config, &mut console) {
        Ok(_) => Ok(()),
        // stdin closed mid-prompt: treat like declining to continue
        Err(BikeshareError::InputClosed) => Ok(()),
        Err(err) => Err(err).with_context(|| {
            format!(
                "failed to explore trip data in {}",
                config.data_dir().display()
            )
        }),
    }
}
