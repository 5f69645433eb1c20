use super::{NotificationData, CLICK_ACTION};

/// Where a notification click should navigate. Falls back to `default_url`
/// when the data has no (or an empty) `click_action`.
pub fn click_target<'a>(data: &'a NotificationData, default_url: &'a str) -> &'a str {
    data.get(CLICK_ACTION)
        .map(String::as_str)
        .filter(|url| !url.is_empty())
        .unwrap_or(default_url)
}

/// What handling a notification click did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The first open window was focused
    Focused,
    /// No window was open so one was opened at this URL
    Opened(String),
    /// No window was open and the platform can't open one
    Nothing,
}

impl ClickOutcome {
    /// Decides the outcome given how many windows are open
    pub fn plan(window_count: usize, supports_window_open: bool, target: &str) -> Self {
        if window_count > 0 {
            Self::Focused
        } else if supports_window_open {
            Self::Opened(target.to_string())
        } else {
            Self::Nothing
        }
    }
}
