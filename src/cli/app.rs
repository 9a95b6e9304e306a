//! Interactive app runner

use std::process::ExitCode;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::application::ports::{engine_channel, ConfigStore};
use crate::application::RecordingController;
use crate::domain::config::AppConfig;
use crate::domain::recording::RecordingTake;
use crate::infrastructure::{
    create_notifier, CpalAudioSession, CpalRecorder, RodioPlayer, XdgConfigStore,
};

use super::args::AppOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// One user command, as typed
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Record,
    Play,
    Stop,
    Quit,
    Empty,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    match line.trim().to_lowercase().as_str() {
        "" => Command::Empty,
        "r" | "record" => Command::Record,
        "p" | "play" => Command::Play,
        "s" | "stop" => Command::Stop,
        "q" | "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

/// Run the interactive record/play session
pub async fn run_app(options: AppOptions) -> ExitCode {
    let mut presenter = Presenter::new();

    let (events_tx, mut events_rx) = engine_channel();

    // Compose the controller over the real engine adapters
    let session = CpalAudioSession::new();
    let recorder = CpalRecorder::new(events_tx.clone());
    let player = RodioPlayer::new(events_tx);
    let notifier = create_notifier(options.notify);
    let take = RecordingTake::at_default_location();

    let mut controller =
        RecordingController::new(session, recorder, player, notifier, take, options.volume);

    controller.setup().await;

    presenter.banner();
    presenter.render(controller.status(), controller.record_affordance());

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line {
                    Ok(Some(line)) => match parse_command(&line) {
                        Command::Record => controller.handle_record().await,
                        Command::Play => controller.handle_play().await,
                        Command::Stop => controller.handle_stop().await,
                        Command::Quit => break,
                        Command::Empty => continue,
                        Command::Unknown(cmd) => {
                            presenter.warn(&format!("Unknown command: {} (try r, p, s, or q)", cmd));
                            continue;
                        }
                    },
                    // stdin closed
                    Ok(None) => break,
                    Err(e) => {
                        presenter.error(&format!("Failed to read input: {}", e));
                        return ExitCode::from(EXIT_ERROR);
                    }
                }
            }
            Some(event) = events_rx.recv() => {
                controller.handle_engine_event(event).await;
            }
            _ = tokio::signal::ctrl_c() => break,
        }

        presenter.render(controller.status(), controller.record_affordance());
    }

    // Leave no capture running behind us
    if controller.is_recording() {
        controller.handle_stop().await;
        presenter.render(controller.status(), controller.record_affordance());
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Load and merge configuration from file and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Merge: defaults < file < cli
    AppConfig::defaults().merge(file_config).merge(cli_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_letters() {
        assert_eq!(parse_command("r"), Command::Record);
        assert_eq!(parse_command("p"), Command::Play);
        assert_eq!(parse_command("s"), Command::Stop);
        assert_eq!(parse_command("q"), Command::Quit);
    }

    #[test]
    fn parse_full_words_any_case() {
        assert_eq!(parse_command("Record"), Command::Record);
        assert_eq!(parse_command("PLAY"), Command::Play);
        assert_eq!(parse_command("stop"), Command::Stop);
        assert_eq!(parse_command("exit"), Command::Quit);
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(parse_command("  r  "), Command::Record);
        assert_eq!(parse_command("   "), Command::Empty);
    }

    #[test]
    fn parse_flags_unknown_input() {
        assert_eq!(
            parse_command("rewind"),
            Command::Unknown("rewind".to_string())
        );
    }
}
