//! User-visible notifications.

use crate::types::Notice;

/// Shows a [`Notice`] to the user.
pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

/// Blocking `window.alert`, as the listing form always did.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, notice: &Notice) {
        let message = notice.message();
        let Some(window) = web_sys::window() else {
            log::warn!("No window to alert: {}", message);
            return;
        };
        if let Err(e) = window.alert_with_message(&message) {
            log::error!("Alert failed: {:?}", e);
        }
    }
}
