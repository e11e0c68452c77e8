use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use aiout_cli::commands::{capture, collect, convert};
use aiout_cli::{Cli, Commands, Config};

/// Load config, reporting the resolved values at debug level.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    match &cli.command {
        Some(Commands::Capture {
            event,
            config_file,
            test,
        }) => {
            if config_file.is_some() {
                tracing::debug!("--config-file is accepted for compatibility and ignored");
            }
            let config = load_config(cli.config.as_deref())?;
            capture::run(&config.output_dir, event, *test)?;
        }
        Some(Commands::Convert) => {
            let config = load_config(cli.config.as_deref())?;
            convert::run(&config.output_dir)?;
        }
        Some(Commands::Collect {
            start,
            end,
            output_dir,
        }) => {
            let config = load_config(cli.config.as_deref())?;
            let out_dir = output_dir
                .clone()
                .unwrap_or_else(|| config.output_dir.clone());
            collect::run(&config.output_dir, &out_dir, start, end)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
