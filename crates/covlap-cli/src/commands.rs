use crate::args::{Cli, Commands};
use crate::config::Config;
use crate::handlers;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::path::Path;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze {
            holdings,
            config,
            out_dir,
            as_of,
        } => {
            let config = load_config(config.as_deref())?;
            handlers::analyze::handle(&holdings, &config, &out_dir, resolve_as_of(as_of), cli.format)
        }

        Commands::Packages { holdings, config } => {
            let config = load_config(config.as_deref())?;
            handlers::packages::handle(&holdings, &config, cli.format)
        }

        Commands::Check {
            holdings,
            config,
            as_of,
        } => {
            let config = load_config(config.as_deref())?;
            handlers::check::handle(&holdings, &config, resolve_as_of(as_of), cli.format)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Ok(Config::default()),
    }
}

fn resolve_as_of(explicit: Option<NaiveDate>) -> NaiveDate {
    explicit.unwrap_or_else(|| Local::now().date_naive())
}
