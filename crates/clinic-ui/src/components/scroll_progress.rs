//! Reading progress bar pinned to the top of the page.

use dioxus::prelude::*;

/// Fixed bar whose width follows the scroll position.
///
/// `percent` is expected in `0.0..=100.0`; anything outside is clamped.
#[component]
pub fn ScrollProgress(percent: f64) -> Element {
    let width = bar_width(percent);
    rsx! {
        div { class: "scroll-progress", "aria-hidden": "true",
            div { class: "scroll-progress-bar", style: "width: {width}" }
        }
    }
}

fn bar_width(percent: f64) -> String {
    let percent = if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    };
    format!("{percent:.2}%")
}
