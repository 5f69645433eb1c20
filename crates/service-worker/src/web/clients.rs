use std::collections::HashMap;

use gloo::utils::format::JsValueSerdeExt;
use push_shared::model::{ForegroundMessage, NotificationData};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    js_sys::Array, ClientQueryOptions, ClientType, Clients, Notification, VisibilityState,
    WindowClient,
};

use super::error::to_js_error;
use crate::capability::{ClickedNotification, ForegroundWindows, WindowClients};

pub struct WebNotification(Notification);

impl WebNotification {
    pub fn new(notification: Notification) -> Self {
        Self(notification)
    }
}

impl ClickedNotification for WebNotification {
    fn close(&self) {
        self.0.close();
    }

    fn data(&self) -> NotificationData {
        // Notifications shown by other code can carry any JSON, only the string
        // values are usable as notification data
        let data: HashMap<String, serde_json::Value> =
            JsValueSerdeExt::into_serde(&self.0.data()).unwrap_or_default();

        data.into_iter()
            .filter_map(|(k, v)| match v {
                serde_json::Value::String(s) => Some((k, s)),
                _ => None,
            })
            .collect()
    }
}

pub struct ServiceWorkerClients {
    clients: Clients,
}

impl ServiceWorkerClients {
    pub fn new(clients: Clients) -> Self {
        Self { clients }
    }
}

impl WindowClients for ServiceWorkerClients {
    type Window = WindowClient;
    type Error = JsValue;

    async fn match_all_windows(&self) -> Result<Vec<Self::Window>, Self::Error> {
        let mut options = ClientQueryOptions::new();
        options.include_uncontrolled(true).type_(ClientType::Window);

        let clients: Array = JsFuture::from(self.clients.match_all_with_options(&options))
            .await?
            .into();

        Ok(clients
            .iter()
            .map(|client| client.unchecked_into::<WindowClient>())
            .collect())
    }

    async fn focus(&self, window: &Self::Window) -> Result<(), Self::Error> {
        JsFuture::from(window.focus()?).await?;
        Ok(())
    }

    async fn open_window(&self, url: &str) -> Result<(), Self::Error> {
        // This is broken in firefox android
        // <https://bugzilla.mozilla.org/show_bug.cgi?id=1717431>
        JsFuture::from(self.clients.open_window(url)).await?;
        Ok(())
    }
}

impl ForegroundWindows for ServiceWorkerClients {
    fn is_visible(&self, window: &Self::Window) -> bool {
        window.visibility_state() == VisibilityState::Visible
    }

    fn post_message(
        &self,
        window: &Self::Window,
        message: &ForegroundMessage,
    ) -> Result<(), Self::Error> {
        let message = <JsValue as JsValueSerdeExt>::from_serde(message).map_err(to_js_error)?;
        window.post_message(&message)
    }
}
