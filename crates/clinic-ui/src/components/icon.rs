//! Inline Lucide icons.
//!
//! Icons are rendered as SVG directly, so nothing has to materialize them
//! after the DOM changes.

use dioxus::prelude::*;

const CIRCLE: &str = "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0";

/// Icons used on the page
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconName {
    X,
    Menu,
    AlertCircle,
    Phone,
    Calendar,
    Clock,
    Heart,
    Activity,
    Eye,
    Bone,
    Smile,
    Flask,
    Plus,
}

impl IconName {
    /// SVG path data, 24x24 viewbox
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            IconName::X => &["M18 6 6 18", "m6 6 12 12"],
            IconName::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            IconName::AlertCircle => &[CIRCLE, "M12 8v4", "M12 16h.01"],
            IconName::Phone => &["M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"],
            IconName::Calendar => &[
                "M8 2v4",
                "M16 2v4",
                "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M3 10h18",
            ],
            IconName::Clock => &[CIRCLE, "M12 6v6l4 2"],
            IconName::Heart => &["M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"],
            IconName::Activity => &["M22 12h-4l-3 9L9 3l-3 9H2"],
            IconName::Eye => &[
                "M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z",
                "M15 12a3 3 0 1 1-6 0 3 3 0 0 1 6 0",
            ],
            IconName::Bone => &["M17 10c.7-.7 1.69 0 2.5 0a2.5 2.5 0 1 0 0-5 .5.5 0 0 1-.5-.5 2.5 2.5 0 1 0-5 0c0 .81.7 1.8 0 2.5l-7 7c-.7.7-1.69 0-2.5 0a2.5 2.5 0 0 0 0 5c.28 0 .5.22.5.5a2.5 2.5 0 1 0 5 0c0-.81-.7-1.8 0-2.5Z"],
            IconName::Smile => &[CIRCLE, "M8 14s1.5 2 4 2 4-2 4-2", "M9 9h.01", "M15 9h.01"],
            IconName::Flask => &[
                "M9 3h6",
                "M10 3v6L4.6 19.5A1 1 0 0 0 5.5 21h13a1 1 0 0 0 .9-1.5L14 9V3",
            ],
            IconName::Plus => &["M12 5v14", "M5 12h14"],
        }
    }

    /// Icon for a specialty key, used on service cards
    pub fn for_specialty(key: &str) -> Self {
        match key {
            "cardiology" => IconName::Heart,
            "neurology" => IconName::Activity,
            "ophthalmology" => IconName::Eye,
            "traumatology" => IconName::Bone,
            "pediatrics" => IconName::Smile,
            "laboratory" => IconName::Flask,
            _ => IconName::Plus,
        }
    }
}

/// Inline SVG icon
#[component]
pub fn Icon(name: IconName, #[props(default = 24)] size: u32) -> Element {
    rsx! {
        svg {
            class: "icon",
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in name.paths() {
                path { d: *d }
            }
        }
    }
}
