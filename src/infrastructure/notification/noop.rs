//! No-op alert adapter
//!
//! Used when desktop notifications are disabled; alerts still reach the user
//! through the status line.

use async_trait::async_trait;

use crate::application::ports::{AlertIcon, NotificationError, Notifier};

/// Notifier that swallows every alert
pub struct NoOpNotifier;

impl NoOpNotifier {
    /// Create a new no-op notifier
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NoOpNotifier {
    async fn alert(
        &self,
        _title: &str,
        _message: &str,
        _icon: AlertIcon,
    ) -> Result<(), NotificationError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn alert_always_succeeds() {
        let notifier = NoOpNotifier::new();
        let result = notifier.alert("Title", "Message", AlertIcon::Error).await;
        assert!(result.is_ok());
    }
}
