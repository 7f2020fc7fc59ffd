//! Service cards. Booking from a card pre-selects its specialty.

use clinic_core::{Preselect, SPECIALTIES};
use dioxus::prelude::*;

use crate::components::reveal::{reveal_style, use_reveal};
use crate::context::{open_booking, use_booking_modal, use_notifier};
use clinic_ui::{Button, ButtonVariant, Icon, IconName};

#[component]
pub fn Services() -> Element {
    let modal = use_booking_modal();
    let notifier = use_notifier();
    let tracker = use_reveal("services", SPECIALTIES.len());

    rsx! {
        section { id: "services", class: "section services",
            div { class: "container",
                SectionHeader {
                    title: "Наши услуги",
                    subtitle: "Полный спектр медицинских услуг для взрослых и детей",
                }
                div { class: "services-grid",
                    for (i, specialty) in SPECIALTIES.iter().enumerate() {
                        div {
                            key: "{specialty.key}",
                            class: format!("service-card {}", tracker.read().class_for(i)),
                            style: reveal_style(&tracker.read(), i),
                            "data-reveal": "services",
                            "data-index": "{i}",
                            div { class: "service-icon",
                                Icon { name: IconName::for_specialty(specialty.key), size: 32 }
                            }
                            h3 { class: "service-title", "{specialty.title}" }
                            p { class: "service-description", {description(specialty.key)} }
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| {
                                    tracing::debug!(specialty = specialty.key, "Booking from service card");
                                    open_booking(modal, notifier, Some(Preselect::specialty(specialty.key)));
                                },
                                "Записаться"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Title block shared by the page sections.
#[component]
pub fn SectionHeader(title: &'static str, subtitle: &'static str) -> Element {
    rsx! {
        div { class: "section-header",
            h2 { class: "section-title", "{title}" }
            p { class: "section-subtitle", "{subtitle}" }
        }
    }
}

fn description(key: &str) -> &'static str {
    match key {
        "cardiology" => "Диагностика и лечение заболеваний сердца, ЭКГ, суточное мониторирование",
        "neurology" => "Лечение головных болей, нарушений сна и заболеваний нервной системы",
        "ophthalmology" => "Проверка зрения, подбор очков и линз, лечение заболеваний глаз",
        "traumatology" => "Помощь при травмах, переломах и заболеваниях суставов",
        "pediatrics" => "Наблюдение и лечение детей от рождения до 18 лет",
        "laboratory" => "Анализы крови и мочи, гормоны и инфекции, результаты онлайн",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_specialty_is_described() {
        for specialty in SPECIALTIES {
            assert!(!description(specialty.key).is_empty(), "{}", specialty.key);
        }
    }
}
