use std::fmt::Display;

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{
    Error as GenericJsError, RangeError as JsRangeError, ReferenceError as JsReferenceError,
    TypeError as JsTypeError,
};

/// A rejected promise or thrown value, classified for log output
#[derive(Debug, Error)]
pub enum JsError {
    #[error("TypeError: {0}")]
    Type(String),
    #[error("RangeError: {0}")]
    Range(String),
    #[error("ReferenceError: {0}")]
    Reference(String),
    #[error("{name}: {message}")]
    Generic { name: String, message: String },
    #[error("Unknown JS value: {0}")]
    UnknownJsValue(String),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<JsValue> for JsError {
    fn from(err: JsValue) -> JsError {
        let Some(error) = err.dyn_ref::<GenericJsError>() else {
            return match err.as_string() {
                Some(s) => JsError::UnknownJsValue(s),
                None => JsError::UnknownJsValue(format!("{:?}", err)),
            };
        };

        let message = String::from(error.message());
        if err.is_instance_of::<JsTypeError>() {
            return JsError::Type(message);
        }
        if err.is_instance_of::<JsRangeError>() {
            return JsError::Range(message);
        }
        if err.is_instance_of::<JsReferenceError>() {
            return JsError::Reference(message);
        }
        JsError::Generic {
            name: String::from(error.name()),
            message,
        }
    }
}

/// Wraps a rust error so it can reject a promise
pub fn to_js_error(e: impl Display) -> JsValue {
    GenericJsError::new(&e.to_string()).into()
}
