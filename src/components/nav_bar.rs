//! Fixed navigation bar with mobile menu and anchor scrolling.

use clinic_core::NavigationController;
use dioxus::prelude::*;

use crate::context::{open_booking, use_booking_modal, use_navigation, use_notifier, PageNavigationView};
use clinic_ui::{Button, ButtonVariant, Icon, IconName};

/// Menu entries: label and anchor.
const LINKS: &[(&str, &str)] = &[
    ("Главная", "#hero"),
    ("Услуги", "#services"),
    ("Врачи", "#doctors"),
    ("Контакты", "#contacts"),
];

#[component]
pub fn NavBar() -> Element {
    let mut navigation = use_navigation();
    let modal = use_booking_modal();
    let notifier = use_notifier();

    let nav = navigation.read();
    let navbar_style = nav.navbar_style();
    let toggle_class = nav.menu_class("nav-toggle");
    let menu_class = nav.menu_class("nav-menu");
    let expanded = nav.is_menu_open();
    drop(nav);

    rsx! {
        nav { class: "navbar", style: "{navbar_style}",
            div { class: "nav-container",
                a {
                    class: "nav-logo",
                    href: "#hero",
                    onclick: move |evt| {
                        evt.prevent_default();
                        follow_anchor(navigation, "#hero");
                    },
                    Icon { name: IconName::Plus, size: 28 }
                    span { "МедЦентр" }
                }

                ul { class: "{menu_class}",
                    for (label, href) in LINKS.iter().copied() {
                        li { key: "{href}",
                            a {
                                class: "nav-link",
                                href: "{href}",
                                onclick: move |evt| {
                                    evt.prevent_default();
                                    navigation.write().link_selected();
                                    follow_anchor(navigation, href);
                                },
                                "{label}"
                            }
                        }
                    }
                    li {
                        Button {
                            variant: ButtonVariant::Primary,
                            class: "nav-cta".to_string(),
                            onclick: move |_| {
                                navigation.write().link_selected();
                                open_booking(modal, notifier, None);
                            },
                            "Записаться"
                        }
                    }
                }

                button {
                    class: "{toggle_class}",
                    r#type: "button",
                    "aria-label": "Меню",
                    "aria-expanded": "{expanded}",
                    onclick: move |_| {
                        let open = navigation.write().toggle_menu();
                        tracing::debug!(open, "Mobile menu toggled");
                    },
                    Icon { name: IconName::Menu, size: 24 }
                }
            }
        }
    }
}

/// Scroll to the element behind `href`, leaving room for the fixed header.
///
/// Bare `#` and targets missing from the page are ignored.
pub fn follow_anchor(mut navigation: Signal<NavigationController>, href: &'static str) {
    if !is_anchor(href) {
        return;
    }
    spawn(async move {
        let script = format!(
            "const el = document.querySelector('{href}'); return el ? [el.getBoundingClientRect().top, window.pageYOffset] : null;"
        );
        match document::eval(&script).join::<Option<(f64, f64)>>().await {
            Ok(Some((element_top, page_offset))) => {
                navigation
                    .write()
                    .follow_anchor(element_top, page_offset, &mut PageNavigationView);
            }
            Ok(None) => tracing::debug!(href, "Anchor target not found"),
            Err(e) => tracing::warn!(href, "Could not measure anchor target: {:?}", e),
        }
    });
}

fn is_anchor(href: &str) -> bool {
    href.len() > 1 && href.starts_with('#')
}
