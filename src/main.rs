//! Parrot CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use parrot::cli::{
    app::{load_merged_config, run_app, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{AppOptions, Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use parrot::domain::config::AppConfig;
use parrot::infrastructure::XdgConfigStore;
use parrot::DEFAULT_LOG_LEVEL;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    // Diagnostics go to stderr; the presenter owns user-facing output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("PARROT_LOG")
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        None => {}
    }

    // Validate volume from args
    if let Some(volume) = cli.volume {
        if !(0.0..=1.0).contains(&volume) {
            presenter.error(&format!(
                "Invalid volume: {} (expected 0.0 to 1.0)",
                volume
            ));
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        notify: if cli.notify { Some(true) } else { None },
        volume: cli.volume,
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    let options = AppOptions {
        notify: config.notify_or_default(),
        volume: config.volume_or_default(),
    };

    run_app(options).await
}
