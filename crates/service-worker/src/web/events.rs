use std::{cell::RefCell, rc::Rc};

use push_shared::model::PushPayload;
use tracing::warn;
use wasm_bindgen::JsValue;
use web_sys::{Notification, ServiceWorkerGlobalScope};

use super::clients::{ServiceWorkerClients, WebNotification};
use crate::{
    capability::{
        BackgroundMessageHandler, ClickedNotification, NotificationClickSource,
        PushMessagingClient,
    },
    dispatch::dispatch_push,
    router::NotificationRouter,
};

// The bootstrap script has to add the event listeners while it's first
// evaluated, before the wasm is loaded. Its listeners call into the exported
// functions which dispatch to whatever was bound here.
thread_local! {
    static BACKGROUND_HANDLER: RefCell<Option<Rc<BackgroundMessageHandler>>> =
        const { RefCell::new(None) };
    static ROUTER: RefCell<Option<Rc<NotificationRouter>>> = const { RefCell::new(None) };
}

/// `push` events of the worker's scope
pub struct PushEvents;

impl PushMessagingClient for PushEvents {
    type Error = JsValue;

    fn on_background_message(&self, handler: BackgroundMessageHandler) -> Result<(), Self::Error> {
        BACKGROUND_HANDLER.with(|slot| *slot.borrow_mut() = Some(Rc::new(handler)));
        Ok(())
    }
}

/// `notificationclick` events of the worker's scope
pub struct ClickEvents;

impl NotificationClickSource for ClickEvents {
    type Error = JsValue;

    fn on_notification_click(&self, router: Rc<NotificationRouter>) -> Result<(), Self::Error> {
        ROUTER.with(|slot| *slot.borrow_mut() = Some(router));
        Ok(())
    }
}

/// Handles the text of a push event, see [`dispatch_push`]
pub async fn push(sw: ServiceWorkerGlobalScope, text: Option<String>) -> Result<JsValue, JsValue> {
    let handler = BACKGROUND_HANDLER.with(|slot| slot.borrow().clone());
    let payload = PushPayload::from_push_text(text.as_deref());
    let clients = ServiceWorkerClients::new(sw.clients());

    dispatch_push(handler.as_deref(), &clients, payload).await?;
    Ok(JsValue::undefined())
}

/// Handles a click on a notification. Platform errors reject the returned
/// promise.
pub async fn notification_click(
    sw: ServiceWorkerGlobalScope,
    notification: Notification,
) -> Result<JsValue, JsValue> {
    let notification = WebNotification::new(notification);

    let Some(router) = ROUTER.with(|slot| slot.borrow().clone()) else {
        warn!("Notification clicked before the router was registered");
        notification.close();
        return Ok(JsValue::undefined());
    };

    let clients = ServiceWorkerClients::new(sw.clients());
    router.handle_click(&notification, &clients).await?;

    Ok(JsValue::undefined())
}
