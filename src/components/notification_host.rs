//! Renders the page's single notification slot.

use dioxus::prelude::*;

use crate::context::use_notifier;
use clinic_ui::Toast;

#[component]
pub fn NotificationHost() -> Element {
    let notifier = use_notifier();
    let current = notifier.center().read().current().cloned();

    rsx! {
        if let Some(notification) = current {
            Toast {
                key: "{notification.id}",
                notification: notification,
                on_close: move |_| notifier.dismiss(),
            }
        }
    }
}
