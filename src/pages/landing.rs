//! Landing page - the clinic's single page.
//!
//! Sections are laid out top to bottom; the booking modal, notification
//! slot and page listeners are mounted once alongside them.

use dioxus::prelude::*;

use crate::components::services::SectionHeader;
use crate::components::{
    BookingModalView, Doctors, Hero, LiveRegion, NavBar, NotificationHost, PageSignals, Services,
    SkipLink,
};
use crate::landing_config;
use clinic_ui::{Icon, IconName};

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    use_effect(|| {
        tracing::info!("МедЦентр landing page loaded");
    });

    rsx! {
        SkipLink {}
        PageSignals {}
        NavBar {}

        main { class: "landing",
            Hero {}
            Services {}
            Doctors {}
            Contacts {}
        }

        Footer {}
        BookingModalView {}
        NotificationHost {}
        LiveRegion {}
    }
}

#[component]
fn Contacts() -> Element {
    let phone = &landing_config().messages.emergency_phone;

    rsx! {
        section { id: "contacts", class: "section contacts",
            div { class: "container",
                SectionHeader {
                    title: "Контакты",
                    subtitle: "Мы работаем без выходных",
                }
                div { class: "contacts-grid",
                    div { class: "contact-item",
                        Icon { name: IconName::Phone, size: 24 }
                        div {
                            h4 { "Телефон" }
                            p { "+7 (495) 123-45-67" }
                        }
                    }
                    div { class: "contact-item",
                        Icon { name: IconName::Clock, size: 24 }
                        div {
                            h4 { "Часы работы" }
                            p { "Пн–Пт: 8:00–21:00, Сб–Вс: 9:00–18:00" }
                        }
                    }
                    div { class: "contact-item emergency",
                        Icon { name: IconName::AlertCircle, size: 24 }
                        div {
                            h4 { "Экстренная служба" }
                            a { href: "tel:{phone}", "Круглосуточно" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "container",
                p { class: "footer-brand", "МедЦентр" }
                p { class: "footer-note", "Лицензия на медицинскую деятельность. Имеются противопоказания, необходима консультация специалиста." }
            }
        }
    }
}
