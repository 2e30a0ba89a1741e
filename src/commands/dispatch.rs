//! Command dispatch logic for paperwiki

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use paperwiki_core::config::Config;
use paperwiki_core::error::Result;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = Config::resolve(cli.config.as_deref())?;

    if cli.verbose {
        tracing::debug!(elapsed = ?start.elapsed(), "load_config");
    }

    match &cli.command {
        Commands::Open(args) => commands::open::execute(cli, &config, args, start),
        Commands::List(args) => commands::list::execute(cli, &config, args),
    }
}
