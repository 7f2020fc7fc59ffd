//! Skip link and the polite live region used for announcements.

use dioxus::prelude::*;

use crate::context::use_notifier;

/// Keyboard shortcut past the navigation, visible only when focused.
#[component]
pub fn SkipLink() -> Element {
    rsx! {
        a { class: "skip-link", href: "#hero", "Перейти к основному содержанию" }
    }
}

/// Visually hidden region read out by screen readers.
#[component]
pub fn LiveRegion() -> Element {
    let announcer = use_notifier().announcer();
    let text = announcer.read().text().to_string();

    rsx! {
        div {
            id: "announcer",
            class: "sr-only",
            "aria-live": "polite",
            "aria-atomic": "true",
            "{text}"
        }
    }
}
