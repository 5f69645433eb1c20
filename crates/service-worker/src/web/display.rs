use gloo::utils::format::JsValueSerdeExt;
use push_shared::model::DisplayNotification;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{NotificationOptions, ServiceWorkerGlobalScope};

use super::error::JsError;
use crate::capability::NotificationDisplay;

/// Shows notifications through the worker's registration
pub struct RegistrationDisplay {
    sw: ServiceWorkerGlobalScope,
}

impl RegistrationDisplay {
    pub fn new(sw: ServiceWorkerGlobalScope) -> Self {
        Self { sw }
    }
}

impl NotificationDisplay for RegistrationDisplay {
    type Error = JsError;

    async fn show_notification(
        &self,
        notification: &DisplayNotification,
    ) -> Result<(), Self::Error> {
        let data = <JsValue as JsValueSerdeExt>::from_serde(&notification.options.data)?;

        let mut options = NotificationOptions::new();
        options
            .body(&notification.options.body)
            .icon(&notification.options.icon)
            .data(&data);
        if let Some(image) = &notification.options.image {
            options.image(image);
        }
        if let Some(tag) = &notification.options.tag {
            options.tag(tag);
        }

        JsFuture::from(
            self.sw
                .registration()
                .show_notification_with_options(&notification.title, &options)?,
        )
        .await?;

        Ok(())
    }
}
