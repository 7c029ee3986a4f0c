use std::path::PathBuf;

use tracing::{debug, info};

use crate::cli::commands::{Cli, Commands};
use crate::io::config_io::{self, ConfigError};
use crate::io::logging;
use crate::model::Config;
use crate::tui::app::App;
use crate::tui::theme::Theme;

const LOG_FILE_ENV: &str = "DAYPLAN_LOG_FILE";

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(&cli)?;

    match &cli.command {
        Some(Commands::Config) => cmd_config(&config),
        None => {
            // Held until the UI exits so buffered log lines are flushed
            let _guard = match log_file(&cli) {
                Some(path) => Some(logging::init(&path, &cli.log_level)?),
                None => None,
            };
            cmd_tui(&config)
        }
    }
}

/// Config file (if any) with command-line overrides applied
pub fn resolve_config(cli: &Cli) -> Result<Config, ConfigError> {
    let (mut config, _source) = config_io::load_config(cli.config.as_deref())?;
    if let Some(bucket) = cli.filter {
        config.tasks.start_filter = bucket;
    }
    if cli.demo {
        config.tasks.demo = true;
    }
    if cli.no_mouse {
        config.ui.mouse = false;
    }
    Ok(config)
}

fn log_file(cli: &Cli) -> Option<PathBuf> {
    cli.log_file.clone().or_else(|| {
        std::env::var_os(LOG_FILE_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    })
}

fn cmd_config(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    // Surface bad colors here too, not only when the UI starts
    Theme::from_config(&config.ui)?;
    print!("{}", config_io::config_to_string(config)?);
    Ok(())
}

fn cmd_tui(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::from_config(config)?;
    info!(
        filter = %config.tasks.start_filter,
        demo = config.tasks.demo,
        mouse = config.ui.mouse,
        "starting dayplan"
    );
    crate::tui::run(&mut app)?;
    debug!(tasks = app.tasks.tasks().len(), "exiting");
    Ok(())
}
