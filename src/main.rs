use std::env;

use anyhow::Result;
use clap::Parser;
use expense_tracker::cli::Cli;
use log::LevelFilter;

fn main() -> Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    cli.run()
}

/// Diagnostics go to stderr; quiet unless `RUST_LOG` asks for more.
fn init_logging() -> Result<()> {
    let mut builder = pretty_env_logger::formatted_builder();
    match env::var("RUST_LOG") {
        Ok(filters) => {
            builder.parse_filters(&filters);
        }
        Err(_) => {
            builder.filter_module("expense_tracker", LevelFilter::Warn);
        }
    }
    builder.try_init()?;
    Ok(())
}
