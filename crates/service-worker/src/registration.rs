use std::rc::Rc;

use tracing::info;

use crate::{
    bridge::MessagingBridge,
    capability::{NotificationClickSource, NotificationDisplay, PushMessagingClient},
    router::NotificationRouter,
};

/// What [`register_service_worker`] bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    pub background_messages: bool,
}

/// Binds the bridge's background handler and the router's click handler.
/// Call once when the worker starts.
pub fn register_service_worker<D, P, S, E>(
    bridge: &MessagingBridge<D>,
    router: NotificationRouter,
    push: &P,
    clicks: &S,
) -> Result<Registration, E>
where
    D: NotificationDisplay + 'static,
    P: PushMessagingClient<Error = E>,
    S: NotificationClickSource<Error = E>,
{
    let background_messages = bridge.register(push)?;
    clicks.on_notification_click(Rc::new(router))?;
    info!(background_messages, "Service worker handlers registered");

    Ok(Registration {
        background_messages,
    })
}
