use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::PayloadError;

/// String map attached to a push message and echoed back on click
pub type NotificationData = HashMap<String, String>;

/// Key in [`NotificationData`] holding the URL to navigate to on click
pub const CLICK_ACTION: &str = "click_action";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushNotification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A message as delivered by FCM in the body of a push event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification: Option<PushNotification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<NotificationData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapse_key: Option<String>,
    #[serde(
        default,
        rename = "fcmMessageId",
        skip_serializing_if = "Option::is_none"
    )]
    pub fcm_message_id: Option<String>,
}

impl PushPayload {
    pub fn from_json(json: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decodes the text of a push event. A missing or undecodable body still
    /// yields a payload so the event produces a notification with defaults.
    pub fn from_push_text(text: Option<&str>) -> Self {
        let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
            tracing::debug!("Push event has no data");
            return Self::default();
        };

        match Self::from_json(text) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("{e}");
                Self::default()
            }
        }
    }

    /// Title if the message has a non-empty one
    pub fn title(&self) -> Option<&str> {
        self.notification
            .as_ref()
            .and_then(|n| n.title.as_deref())
            .filter(|t| !t.is_empty())
    }

    pub fn body(&self) -> Option<&str> {
        self.notification.as_ref().and_then(|n| n.body.as_deref())
    }

    pub fn image(&self) -> Option<&str> {
        self.notification.as_ref().and_then(|n| n.image.as_deref())
    }
}

/// `messageType` of a push handed to a visible page instead of shown
pub const PUSH_RECEIVED: &str = "push-received";

/// A push forwarded to open pages with `postMessage` because one of them is
/// visible
#[derive(Debug, Clone, Serialize)]
pub struct ForegroundMessage<'a> {
    #[serde(rename = "messageType")]
    pub message_type: &'static str,
    #[serde(flatten)]
    pub payload: &'a PushPayload,
}

impl<'a> ForegroundMessage<'a> {
    pub fn new(payload: &'a PushPayload) -> Self {
        Self {
            message_type: PUSH_RECEIVED,
            payload,
        }
    }
}
