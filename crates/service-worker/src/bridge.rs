use std::rc::Rc;

use futures::FutureExt;
use push_shared::{
    model::{DisplayNotification, PushPayload},
    Capabilities, WorkerConfig,
};
use tracing::{debug, info};

use crate::capability::{BackgroundMessageHandler, NotificationDisplay, PushMessagingClient};

/// Turns background push messages into system notifications
pub struct MessagingBridge<D> {
    config: Rc<WorkerConfig>,
    display: Rc<D>,
    supports_push: bool,
}

impl<D: NotificationDisplay + 'static> MessagingBridge<D> {
    pub fn new(config: Rc<WorkerConfig>, capabilities: Capabilities, display: D) -> Self {
        Self {
            config,
            display: Rc::new(display),
            supports_push: capabilities.supports_push,
        }
    }

    /// Subscribes the background message handler. Returns false without
    /// touching the client if the platform doesn't support push.
    pub fn register<C: PushMessagingClient>(&self, client: &C) -> Result<bool, C::Error> {
        if !self.supports_push {
            info!("Push messaging isn't supported, background messages are disabled");
            return Ok(false);
        }

        client.on_background_message(self.handler())?;
        info!(
            project_id = %self.config.firebase.project_id,
            "Subscribed to background messages"
        );
        Ok(true)
    }

    fn handler(&self) -> BackgroundMessageHandler {
        let config = self.config.clone();
        let display = self.display.clone();

        Box::new(move |payload: PushPayload| {
            let config = config.clone();
            let display = display.clone();
            async move { show_background_message(&*display, &config, payload).await }
                .boxed_local()
        })
    }
}

/// Shows exactly one notification for the message. Display failures are not
/// reported to the caller.
pub async fn show_background_message<D: NotificationDisplay>(
    display: &D,
    config: &WorkerConfig,
    payload: PushPayload,
) {
    debug!(
        message_id = ?payload.fcm_message_id,
        from = ?payload.from,
        "Background message"
    );

    let notification = DisplayNotification::from_payload(&payload, config);
    if let Err(e) = display.show_notification(&notification).await {
        debug!("show_notification failed: {e:?}");
    }
}
