//! Doctor availability badge.

use clinic_core::cosmetic::StatusBadge;
use dioxus::prelude::*;

/// Small dot with a label, e.g. "Принимает".
#[component]
pub fn DoctorStatus(status: StatusBadge) -> Element {
    let class = badge_class(status);
    rsx! {
        div { class: "{class}",
            span { class: "status-dot" }
            span { class: "status-text", "{status.label()}" }
        }
    }
}

fn badge_class(status: StatusBadge) -> String {
    format!("doctor-status {}", status.class())
}
