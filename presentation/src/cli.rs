//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for consultd
#[derive(Parser, Debug)]
#[command(name = "consultd")]
#[command(author, version, about = "Consultation survey service")]
#[command(long_about = r#"
Serves a consultation survey over HTTP: clients fetch a consultation's
questions and submit a full set of answers, receiving an aggregate
REFERRED or FAILED outcome.

Configuration files are loaded from (in priority order):
1. --config <path>            Explicit config file
2. ./consultations.toml       Project-level config
3. ~/.config/consultations/config.toml   Global config

Example:
  consultd
  consultd --port 9000 -vv
  consultd --config ./staging.toml --no-seed
"#)]
pub struct Cli {
    /// Bind address (overrides the config file)
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Bind port (overrides the config file)
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Skip seeding the demo consultation on startup
    #[arg(long)]
    pub no_seed: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}
