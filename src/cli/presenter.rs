//! CLI presenter for output formatting

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::control::RecordAffordance;

/// Presenter for CLI output formatting
pub struct Presenter {
    spinner: Option<ProgressBar>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self { spinner: None }
    }

    /// Print the startup banner
    pub fn banner(&self) {
        eprintln!("{}", "Parrot".bold());
        eprintln!("Your voice goes in, your voice comes back.");
        eprintln!();
    }

    /// Show the current status and controls.
    /// While recording, the status rides on a spinner; otherwise it prints
    /// as a plain line followed by the key hints.
    pub fn render(&mut self, status: &str, affordance: RecordAffordance) {
        if affordance.dimmed {
            self.spin(status);
        } else {
            self.stop_spinner();
            eprintln!("{} {}", "●".cyan(), status);
            eprintln!("  {}", Self::hint_line(affordance));
        }
    }

    /// Build the key-hint line for the current affordance
    pub fn hint_line(affordance: RecordAffordance) -> String {
        let record = format!("[r] {}", affordance.label);
        let record = if affordance.dimmed {
            record.dimmed().to_string()
        } else {
            record.bold().to_string()
        };
        format!("{}  [p] Play  [s] Stop  [q] Quit", record)
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    fn spin(&mut self, message: &str) {
        match &self.spinner {
            Some(spinner) => spinner.set_message(message.to_string()),
            None => {
                let spinner = ProgressBar::new_spinner();
                spinner.set_style(
                    ProgressStyle::default_spinner()
                        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                        .template("{spinner:.red} {msg}")
                        .unwrap(),
                );
                spinner.set_message(message.to_string());
                spinner.enable_steady_tick(std::time::Duration::from_millis(80));
                self.spinner = Some(spinner);
            }
        }
    }

    fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
