//! Notification Toast
//!
//! Renders the single notification slot. The element stays in the DOM
//! through its `Entering` and `Leaving` phases so the CSS transition on the
//! `show` class can run in both directions.

use clinic_core::{Notification, Severity};
use dioxus::prelude::*;

use crate::components::button::CloseButton;

/// Properties for the Toast component
#[derive(Clone, PartialEq, Props)]
pub struct ToastProps {
    /// Notification to render
    pub notification: Notification,
    /// Called when the notification or its close button is clicked
    pub on_close: EventHandler<()>,
}

#[component]
pub fn Toast(props: ToastProps) -> Element {
    let class = props.notification.class();
    let role = aria_role(props.notification.severity);
    let on_close = props.on_close;

    rsx! {
        div {
            class: "{class}",
            role: "{role}",
            onclick: move |_| on_close.call(()),
            div { class: "notification-content",
                span { class: "notification-message", "{props.notification.message}" }
                CloseButton {
                    class: "notification-close".to_string(),
                    onclick: move |_| on_close.call(()),
                }
            }
        }
    }
}

/// Errors interrupt the screen reader, everything else is polite.
fn aria_role(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "alert",
        Severity::Info | Severity::Success => "status",
    }
}
