use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::model::Bucket;

#[derive(Parser)]
#[command(name = "dayplan", about = concat!("[x] dayplan v", env!("CARGO_PKG_VERSION"), " - today and tomorrow, nothing else"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// List to show first
    #[arg(long, global = true, value_name = "today|tomorrow")]
    pub filter: Option<Bucket>,

    /// Start with a few sample tasks
    #[arg(long, global = true)]
    pub demo: bool,

    /// Do not capture the mouse
    #[arg(long, global = true)]
    pub no_mouse: bool,

    /// Write logs to this file (also DAYPLAN_LOG_FILE)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `dayplan=trace` (RUST_LOG wins)
    #[arg(long, global = true, value_name = "FILTER", default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the effective configuration as TOML
    Config,
}
