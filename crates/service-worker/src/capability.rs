//! The seams between the worker logic and the browser. The `web` module
//! implements these over `web-sys`; tests implement them with fakes.
#![allow(async_fn_in_trait)]

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use push_shared::model::{DisplayNotification, ForegroundMessage, NotificationData, PushPayload};

use crate::router::NotificationRouter;

/// Called with each push message received while no page is visible. The
/// returned future settles once the message has been handled.
pub type BackgroundMessageHandler = Box<dyn Fn(PushPayload) -> LocalBoxFuture<'static, ()>>;

/// Source of push messages for the configured application identity
pub trait PushMessagingClient {
    type Error;

    fn on_background_message(&self, handler: BackgroundMessageHandler) -> Result<(), Self::Error>;
}

pub trait NotificationDisplay {
    type Error: std::fmt::Debug;

    async fn show_notification(&self, notification: &DisplayNotification)
        -> Result<(), Self::Error>;
}

/// Source of notification click events, each one is handed to the router
pub trait NotificationClickSource {
    type Error;

    fn on_notification_click(&self, router: Rc<NotificationRouter>) -> Result<(), Self::Error>;
}

/// A notification the user clicked
pub trait ClickedNotification {
    fn close(&self);

    /// The data attached when the notification was shown
    fn data(&self) -> NotificationData;
}

/// Window clients in the worker's scope
pub trait WindowClients {
    type Window;
    type Error;

    /// All window clients, including ones this worker doesn't control yet.
    /// Order is whatever the platform returns.
    async fn match_all_windows(&self) -> Result<Vec<Self::Window>, Self::Error>;

    async fn focus(&self, window: &Self::Window) -> Result<(), Self::Error>;

    async fn open_window(&self, url: &str) -> Result<(), Self::Error>;
}

/// Window clients a push can be handed to instead of being shown
pub trait ForegroundWindows: WindowClients {
    fn is_visible(&self, window: &Self::Window) -> bool;

    fn post_message(
        &self,
        window: &Self::Window,
        message: &ForegroundMessage,
    ) -> Result<(), Self::Error>;
}
