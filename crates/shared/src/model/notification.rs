use serde::{Deserialize, Serialize};

use super::{NotificationData, PushPayload};
use crate::config::WorkerConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    pub body: String,
    pub icon: String,
    pub data: NotificationData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// The system notification shown for a background message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayNotification {
    pub title: String,
    pub options: DisplayOptions,
}

impl DisplayNotification {
    pub fn from_payload(payload: &PushPayload, config: &WorkerConfig) -> Self {
        let title = payload
            .title()
            .unwrap_or(config.default_title.as_str())
            .to_string();

        let options = DisplayOptions {
            body: payload.body().unwrap_or_default().to_string(),
            icon: config.icon.clone(),
            // Must be the payload's map untouched, the click handler reads it back
            data: payload.data.clone().unwrap_or_default(),
            image: payload.image().map(str::to_string),
            tag: payload.collapse_key.clone(),
        };

        Self { title, options }
    }
}
