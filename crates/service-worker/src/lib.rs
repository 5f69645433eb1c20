use std::rc::Rc;

use console_error_panic_hook::set_once as set_panic_hook;
use gloo::utils::format::JsValueSerdeExt;
use push_shared::{utils::tracing::configure_tracing_once, ConfigError, WorkerConfig};
use tracing::info;
use wasm_bindgen::{prelude::wasm_bindgen, JsValue};
use wasm_bindgen_futures::future_to_promise;
use web_sys::{js_sys::Promise, NotificationEvent, PushEvent, ServiceWorkerGlobalScope};

pub mod bridge;
pub mod capability;
pub mod dispatch;
pub mod registration;
pub mod router;
pub mod web;

use bridge::MessagingBridge;
use registration::register_service_worker;
use router::NotificationRouter;
use web::{
    capabilities,
    display::RegistrationDisplay,
    error::to_js_error,
    events::{self, ClickEvents, PushEvents},
};

fn load_config(config: &JsValue) -> Result<WorkerConfig, ConfigError> {
    let config: WorkerConfig = JsValueSerdeExt::into_serde(config)?;
    config.validate()?;
    Ok(config)
}

/// Binds the push and click handlers. Called once by the bootstrap script
/// with the Firebase identity and presentation config. Returns whether
/// background messages are enabled.
#[wasm_bindgen]
pub fn worker_register(sw: ServiceWorkerGlobalScope, config: JsValue) -> Result<bool, JsValue> {
    set_panic_hook();

    let config = load_config(&config).map_err(to_js_error)?;
    configure_tracing_once(config.max_log_level().map_err(to_js_error)?);

    let capabilities = capabilities::detect(&sw);
    info!(?capabilities, "Registering service worker");

    let config = Rc::new(config);
    let bridge = MessagingBridge::new(
        config.clone(),
        capabilities,
        RegistrationDisplay::new(sw),
    );
    let router = NotificationRouter::new(&config, capabilities);

    let registration = register_service_worker(&bridge, router, &PushEvents, &ClickEvents)?;
    Ok(registration.background_messages)
}

#[wasm_bindgen]
pub fn worker_capabilities(sw: ServiceWorkerGlobalScope) -> Result<JsValue, JsValue> {
    <JsValue as JsValueSerdeExt>::from_serde(&capabilities::detect(&sw)).map_err(to_js_error)
}

#[wasm_bindgen]
pub fn worker_push(sw: ServiceWorkerGlobalScope, event: PushEvent) -> Promise {
    let text = event.data().map(|data| data.text());
    future_to_promise(events::push(sw, text))
}

#[wasm_bindgen]
pub fn worker_notification_click(sw: ServiceWorkerGlobalScope, event: NotificationEvent) -> Promise {
    future_to_promise(events::notification_click(sw, event.notification()))
}
