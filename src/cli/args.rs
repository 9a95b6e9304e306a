//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

/// Parrot - record your voice and play it straight back
#[derive(Parser, Debug)]
#[command(name = "parrot")]
#[command(version = "0.1.0")]
#[command(about = "Record your voice from the terminal and play it straight back")]
#[command(long_about = None)]
pub struct Cli {
    /// Mirror alerts as desktop notifications
    #[arg(short = 'n', long)]
    pub notify: bool,

    /// Playback volume (0.0 to 1.0)
    #[arg(short = 'v', long, value_name = "LEVEL", env = "PARROT_VOLUME")]
    pub volume: Option<f32>,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Parsed interactive-session options
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub notify: bool,
    pub volume: f32,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["notify", "volume"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
