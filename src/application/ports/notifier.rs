//! Notification port interface

use async_trait::async_trait;
use thiserror::Error;

/// Notification errors
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("Failed to show notification: {0}")]
    SendFailed(String),
}

/// Alert icon types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertIcon {
    Warning,
    Error,
}

impl AlertIcon {
    /// Get the freedesktop icon name
    pub const fn icon_name(&self) -> &'static str {
        match self {
            Self::Warning => "dialog-warning",
            Self::Error => "dialog-error",
        }
    }
}

/// Port for user-facing alerts (title + message, dismissal only)
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Show an alert.
    ///
    /// # Arguments
    /// * `title` - The alert title
    /// * `message` - The alert body
    /// * `icon` - The icon to display
    async fn alert(
        &self,
        title: &str,
        message: &str,
        icon: AlertIcon,
    ) -> Result<(), NotificationError>;
}

/// Blanket implementation for boxed notifier types
#[async_trait]
impl Notifier for Box<dyn Notifier> {
    async fn alert(
        &self,
        title: &str,
        message: &str,
        icon: AlertIcon,
    ) -> Result<(), NotificationError> {
        self.as_ref().alert(title, message, icon).await
    }
}
