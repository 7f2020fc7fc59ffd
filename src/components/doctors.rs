//! Team section with simulated availability badges.

use clinic_core::cosmetic::{simulate_tick, StatusBadge};
use clinic_core::{DoctorProfile, Preselect, DOCTORS};
use dioxus::prelude::*;

use crate::components::reveal::{reveal_style, use_reveal};
use crate::components::services::SectionHeader;
use crate::context::{open_booking, use_booking_modal, use_notifier};
use crate::landing_config;
use clinic_ui::{Button, ButtonVariant, DoctorStatus};

#[component]
pub fn Doctors() -> Element {
    let modal = use_booking_modal();
    let notifier = use_notifier();
    let tracker = use_reveal("doctors", DOCTORS.len());
    let mut badges = use_signal(|| vec![StatusBadge::Online; DOCTORS.len()]);

    use_future(move || async move {
        let config = &landing_config().status;
        loop {
            tokio::time::sleep(config.interval()).await;
            let changed = simulate_tick(&mut badges.write(), config, &mut rand::rng());
            if changed > 0 {
                tracing::trace!(changed, "Doctor availability changed");
            }
        }
    });

    rsx! {
        section { id: "doctors", class: "section doctors",
            div { class: "container",
                SectionHeader {
                    title: "Наши врачи",
                    subtitle: "Опытные специалисты высшей категории",
                }
                div { class: "doctors-grid",
                    for (i, doctor) in DOCTORS.iter().enumerate() {
                        div {
                            key: "{doctor.practitioner}",
                            class: format!("doctor-card {}", tracker.read().class_for(i)),
                            style: reveal_style(&tracker.read(), i),
                            "data-reveal": "doctors",
                            "data-index": "{i}",
                            div { class: "doctor-photo",
                                span { class: "doctor-initials", {initials(doctor)} }
                                DoctorStatus { status: badges.read().get(i).copied().unwrap_or_default() }
                            }
                            div { class: "doctor-info",
                                h3 { class: "doctor-name", "{doctor.name}" }
                                p { class: "doctor-role", "{doctor.role}" }
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: move |_| {
                                        tracing::debug!(practitioner = doctor.practitioner, "Booking from doctor card");
                                        open_booking(
                                            modal,
                                            notifier,
                                            Some(Preselect::practitioner(doctor.specialty, doctor.practitioner)),
                                        );
                                    },
                                    "Записаться к врачу"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Initials for the photo placeholder, skipping the "Д-р" title.
fn initials(doctor: &DoctorProfile) -> String {
    doctor
        .name
        .split_whitespace()
        .filter(|part| *part != "Д-р")
        .filter_map(|part| part.chars().next())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_skip_title() {
        assert_eq!(initials(&DOCTORS[0]), "АИ");
    }

    #[test]
    fn doctors_belong_to_their_specialty() {
        for doctor in DOCTORS {
            let practitioners = clinic_core::catalog::practitioners_for(doctor.specialty).unwrap();
            assert!(practitioners.iter().any(|p| p.key == doctor.practitioner));
        }
    }
}
