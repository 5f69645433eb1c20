use js_sys::Reflect;
use push_shared::Capabilities;
use wasm_bindgen::JsValue;
use web_sys::ServiceWorkerGlobalScope;

fn has(target: &JsValue, key: &str) -> bool {
    target.is_object() && Reflect::has(target, &JsValue::from_str(key)).unwrap_or(false)
}

/// Whether `global[class].prototype` has `method`
fn prototype_has(global: &JsValue, class: &str, method: &str) -> bool {
    Reflect::get(global, &JsValue::from_str(class))
        .and_then(|class| Reflect::get(&class, &JsValue::from_str("prototype")))
        .map(|prototype| has(&prototype, method))
        .unwrap_or(false)
}

/// Detects what the worker can do, once at startup. Push needs the same
/// browser features the Firebase messaging SDK checks for.
pub fn detect(sw: &ServiceWorkerGlobalScope) -> Capabilities {
    let global = JsValue::from(sw.clone());

    let supports_push = has(&global, "PushManager")
        && has(&global, "Notification")
        && prototype_has(&global, "ServiceWorkerRegistration", "showNotification")
        && prototype_has(&global, "PushSubscription", "getKey");

    let supports_window_open = has(&JsValue::from(sw.clients()), "openWindow");

    Capabilities {
        supports_push,
        supports_window_open,
    }
}
