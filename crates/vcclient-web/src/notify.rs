use vcclient_core::Notifier;
use web_sys::console;

/// Shows messages with the browser's blocking `alert` dialog.
pub struct BrowserAlert;

impl Notifier for BrowserAlert {
    fn alert(&self, message: &str) {
        let shown = web_sys::window().is_some_and(|w| w.alert_with_message(message).is_ok());
        if !shown {
            console::error_1(&message.into());
        }
    }
}
