use std::fmt::Debug;

use push_shared::model::{ForegroundMessage, PushPayload};
use tracing::{debug, warn};

use crate::capability::{BackgroundMessageHandler, ForegroundWindows};

/// Where a push message went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushDispatch {
    /// No background handler is bound, push isn't supported
    Ignored,
    /// A page is visible, the message was posted to this many windows
    Forwarded(usize),
    /// Handed to the background handler
    Background,
}

/// Routes one push message. The windows are enumerated once; if any of them
/// is visible they all get the message, otherwise the background handler
/// does. A failed enumeration counts as no visible window.
pub async fn dispatch_push<C>(
    handler: Option<&BackgroundMessageHandler>,
    clients: &C,
    payload: PushPayload,
) -> Result<PushDispatch, C::Error>
where
    C: ForegroundWindows,
    C::Error: Debug,
{
    let Some(handler) = handler else {
        debug!("No background message handler, ignoring push");
        return Ok(PushDispatch::Ignored);
    };

    match clients.match_all_windows().await {
        Ok(windows) if windows.iter().any(|w| clients.is_visible(w)) => {
            let message = ForegroundMessage::new(&payload);
            for window in windows.iter() {
                clients.post_message(window, &message)?;
            }
            debug!(windows = windows.len(), "Page is visible, forwarded push");
            return Ok(PushDispatch::Forwarded(windows.len()));
        }
        Ok(_) => {}
        Err(e) => warn!("Visibility check failed, handling as background message: {e:?}"),
    }

    handler(payload).await;
    Ok(PushDispatch::Background)
}

#[cfg(test)]
mod test {
    use std::{
        cell::{Cell, RefCell},
        rc::Rc,
    };

    use futures::{executor::block_on, FutureExt};
    use serde_json::json;

    use super::*;
    use crate::capability::WindowClients;

    #[derive(Default)]
    struct FakeWindows {
        // (name, visible)
        windows: Vec<(&'static str, bool)>,
        fail_match: bool,
        fail_post: bool,
        matched: Cell<usize>,
        posted: RefCell<Vec<(&'static str, serde_json::Value)>>,
    }

    impl WindowClients for FakeWindows {
        type Window = (&'static str, bool);
        type Error = String;

        async fn match_all_windows(&self) -> Result<Vec<Self::Window>, Self::Error> {
            self.matched.set(self.matched.get() + 1);
            if self.fail_match {
                return Err("matchAll rejected".to_string());
            }
            Ok(self.windows.clone())
        }

        async fn focus(&self, _: &Self::Window) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn open_window(&self, _: &str) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    impl ForegroundWindows for FakeWindows {
        fn is_visible(&self, window: &Self::Window) -> bool {
            window.1
        }

        fn post_message(
            &self,
            window: &Self::Window,
            message: &ForegroundMessage,
        ) -> Result<(), Self::Error> {
            if self.fail_post {
                return Err("postMessage failed".to_string());
            }
            self.posted
                .borrow_mut()
                .push((window.0, serde_json::to_value(message).unwrap()));
            Ok(())
        }
    }

    fn recording_handler() -> (BackgroundMessageHandler, Rc<RefCell<Vec<PushPayload>>>) {
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = received.clone();
        let handler: BackgroundMessageHandler = Box::new(move |payload: PushPayload| {
            sink.borrow_mut().push(payload);
            async {}.boxed_local()
        });
        (handler, received)
    }

    fn payload() -> PushPayload {
        PushPayload::from_json(
            &json!({
                "notification": { "title": "Risotto" },
                "data": { "click_action": "/recipes/42" },
            })
            .to_string(),
        )
        .unwrap()
    }

    #[test]
    fn test_without_handler_nothing_happens() {
        let clients = FakeWindows {
            windows: vec![("tab-1", true)],
            ..Default::default()
        };

        let dispatch = block_on(dispatch_push(None, &clients, payload())).unwrap();

        assert_eq!(dispatch, PushDispatch::Ignored);
        assert_eq!(clients.matched.get(), 0);
        assert!(clients.posted.borrow().is_empty());
    }

    #[test]
    fn test_visible_page_gets_message_instead() {
        let (handler, received) = recording_handler();
        let clients = FakeWindows {
            windows: vec![("tab-1", false), ("tab-2", true)],
            ..Default::default()
        };

        let dispatch = block_on(dispatch_push(Some(&handler), &clients, payload())).unwrap();

        assert_eq!(dispatch, PushDispatch::Forwarded(2));
        assert!(received.borrow().is_empty());
        // Enumerated once for both the visibility check and the posting
        assert_eq!(clients.matched.get(), 1);

        let posted = clients.posted.borrow();
        assert_eq!(posted.len(), 2);
        assert_eq!(posted[0].0, "tab-1");
        assert_eq!(posted[1].0, "tab-2");
        assert_eq!(
            posted[0].1,
            json!({
                "messageType": "push-received",
                "notification": { "title": "Risotto" },
                "data": { "click_action": "/recipes/42" },
            })
        );
    }

    #[test]
    fn test_hidden_pages_go_to_background() {
        let (handler, received) = recording_handler();
        let clients = FakeWindows {
            windows: vec![("tab-1", false)],
            ..Default::default()
        };

        let dispatch = block_on(dispatch_push(Some(&handler), &clients, payload())).unwrap();

        assert_eq!(dispatch, PushDispatch::Background);
        assert_eq!(*received.borrow(), vec![payload()]);
        assert!(clients.posted.borrow().is_empty());
    }

    #[test]
    fn test_no_windows_go_to_background() {
        let (handler, received) = recording_handler();
        let clients = FakeWindows::default();

        let dispatch = block_on(dispatch_push(Some(&handler), &clients, payload())).unwrap();

        assert_eq!(dispatch, PushDispatch::Background);
        assert_eq!(received.borrow().len(), 1);
    }

    #[test]
    fn test_failed_enumeration_goes_to_background() {
        let (handler, received) = recording_handler();
        let clients = FakeWindows {
            fail_match: true,
            ..Default::default()
        };

        let dispatch = block_on(dispatch_push(Some(&handler), &clients, payload())).unwrap();

        assert_eq!(dispatch, PushDispatch::Background);
        assert_eq!(received.borrow().len(), 1);
    }

    #[test]
    fn test_post_failure_is_returned() {
        let (handler, received) = recording_handler();
        let clients = FakeWindows {
            windows: vec![("tab-1", true)],
            fail_post: true,
            ..Default::default()
        };

        let err = block_on(dispatch_push(Some(&handler), &clients, payload())).unwrap_err();

        assert_eq!(err, "postMessage failed");
        assert!(received.borrow().is_empty());
    }
}
