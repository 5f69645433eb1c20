use push_shared::{
    model::{click_target, ClickOutcome},
    Capabilities, WorkerConfig,
};
use tracing::debug;

use crate::capability::{ClickedNotification, WindowClients};

/// Sends a notification click to an open tab, or a new one
#[derive(Debug, Clone)]
pub struct NotificationRouter {
    default_url: String,
    supports_window_open: bool,
}

impl NotificationRouter {
    pub fn new(config: &WorkerConfig, capabilities: Capabilities) -> Self {
        Self {
            default_url: config.default_url.clone(),
            supports_window_open: capabilities.supports_window_open,
        }
    }

    /// Closes the notification, then focuses the first window client or opens
    /// one at the click target. Platform errors are returned untouched.
    pub async fn handle_click<N, C>(
        &self,
        notification: &N,
        clients: &C,
    ) -> Result<ClickOutcome, C::Error>
    where
        N: ClickedNotification,
        C: WindowClients,
    {
        // Close first, nothing below may prevent it. Chrome doesn't do this by
        // itself
        notification.close();

        let data = notification.data();
        let target = click_target(&data, &self.default_url);

        let windows = clients.match_all_windows().await?;
        let outcome = ClickOutcome::plan(windows.len(), self.supports_window_open, target);
        debug!(windows = windows.len(), ?outcome, "Notification clicked");

        match &outcome {
            ClickOutcome::Focused => {
                if let Some(window) = windows.first() {
                    clients.focus(window).await?;
                }
            }
            ClickOutcome::Opened(url) => clients.open_window(url).await?,
            ClickOutcome::Nothing => {}
        }

        Ok(outcome)
    }
}
