//! Desktop alert adapter using notify-rust
//!
//! Works on Windows, macOS, and Linux. The closest terminal equivalent of a
//! modal dialog: title, message, dismissal only.

use async_trait::async_trait;

use crate::application::ports::{AlertIcon, NotificationError, Notifier};

const APP_NAME: &str = "Parrot";

/// Desktop-notification alerts via notify-rust
pub struct NotifyRustNotifier;

impl NotifyRustNotifier {
    /// Create a new notify-rust notifier
    pub fn new() -> Self {
        Self
    }
}

impl Default for NotifyRustNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NotifyRustNotifier {
    async fn alert(
        &self,
        title: &str,
        message: &str,
        icon: AlertIcon,
    ) -> Result<(), NotificationError> {
        let title = title.to_owned();
        let message = message.to_owned();

        // notify-rust can block on the notification daemon
        tokio::task::spawn_blocking(move || show_sync(&title, &message, icon))
            .await
            .map_err(|e| NotificationError::SendFailed(format!("Task join error: {}", e)))?
    }
}

/// Show a notification synchronously (called from spawn_blocking)
fn show_sync(title: &str, message: &str, icon: AlertIcon) -> Result<(), NotificationError> {
    notify_rust::Notification::new()
        .appname(APP_NAME)
        .summary(title)
        .body(message)
        .icon(icon.icon_name())
        .show()
        .map_err(|e| NotificationError::SendFailed(e.to_string()))?;

    Ok(())
}
