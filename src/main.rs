//! confdoc - regenerates the configuration reference of a markdown document.

use std::{error::Error, process};

use clap::Parser;
use confdoc::{
    cli::{Cli, execute, formatting::format_error},
    config::DocgenConfig,
    tracing_config,
};
use tracing::{Level, error, span};

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    };

    tracing_config::init(&config.general.log_level)?;
    let _span = span!(Level::INFO, "confdoc").entered();

    match execute(&cli.command, config) {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
            Ok(())
        }
        Err(e) => {
            error!(error = ?e, "confdoc failed");
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    }
}

fn load_config(cli: &Cli) -> confdoc::Result<DocgenConfig> {
    let mut config = DocgenConfig::load(&cli.config)?;
    cli.overrides.apply(&mut config);
    config.validate()?;
    Ok(config)
}
