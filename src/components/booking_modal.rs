//! Appointment booking modal.
//!
//! The modal stays mounted for the whole page lifetime and toggles its
//! `active` class, so submissions in flight are never dropped by a close.

use clinic_core::catalog::SPECIALTY_PLACEHOLDER;
use clinic_core::{BookingModal, CloseReason, FieldId, SelectOption, SubmissionClient, SPECIALTIES};
use dioxus::prelude::*;

use crate::context::{
    close_booking, today, use_booking_modal, use_notifier, use_submission_client, Notifier,
    PageModalView,
};
use crate::landing_config;
use clinic_ui::{Button, ButtonVariant, CloseButton, SelectField, TextArea, TextField};

#[component]
pub fn BookingModalView() -> Element {
    let mut modal = use_booking_modal();
    let notifier = use_notifier();
    let client = use_submission_client();

    let submit = move |_| submit_booking(modal, notifier, client.clone());

    let state = modal.read();
    let form = state.form();
    let submitting = form.is_submitting();
    let practitioners = form.practitioners();
    let hidden = !state.is_open();

    rsx! {
        div {
            id: "appointmentModal",
            class: state.class(),
            role: "dialog",
            "aria-modal": "true",
            "aria-labelledby": "modalTitle",
            "aria-hidden": "{hidden}",
            onclick: move |_| {
                close_on_backdrop(modal);
            },
            div {
                class: "modal-content",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "modal-header",
                    h2 { id: "modalTitle", class: "modal-title", "Запись на приём" }
                    CloseButton {
                        class: "modal-close".to_string(),
                        onclick: move |_| {
                            close_booking(modal, CloseReason::CloseButton);
                        },
                    }
                }

                div { id: "appointmentForm", class: "modal-form",
                    TextField {
                        id: FieldId::Name.element_id().to_string(),
                        label: "ФИО".to_string(),
                        placeholder: "Иванов Иван Иванович".to_string(),
                        value: form.value(FieldId::Name).to_string(),
                        error: form.error(FieldId::Name).map(str::to_string),
                        required: true,
                        oninput: move |v: String| modal.write().form_mut().on_input(FieldId::Name, &v),
                        onblur: move |_| blur(modal, FieldId::Name),
                    }
                    div { class: "form-row",
                        TextField {
                            id: FieldId::Phone.element_id().to_string(),
                            label: "Телефон".to_string(),
                            input_type: "tel".to_string(),
                            placeholder: "+7 (___) ___-__-__".to_string(),
                            value: form.value(FieldId::Phone).to_string(),
                            error: form.error(FieldId::Phone).map(str::to_string),
                            required: true,
                            oninput: move |v: String| modal.write().form_mut().on_input(FieldId::Phone, &v),
                            onblur: move |_| blur(modal, FieldId::Phone),
                        }
                        TextField {
                            id: FieldId::Email.element_id().to_string(),
                            label: "Email".to_string(),
                            input_type: "email".to_string(),
                            placeholder: "example@mail.ru".to_string(),
                            value: form.value(FieldId::Email).to_string(),
                            error: form.error(FieldId::Email).map(str::to_string),
                            oninput: move |v: String| modal.write().form_mut().on_input(FieldId::Email, &v),
                            onblur: move |_| blur(modal, FieldId::Email),
                        }
                    }
                    div { class: "form-row",
                        SelectField {
                            id: FieldId::Specialty.element_id().to_string(),
                            label: "Услуга".to_string(),
                            options: specialty_options(),
                            selected: form.value(FieldId::Specialty).to_string(),
                            error: form.error(FieldId::Specialty).map(str::to_string),
                            required: true,
                            onchange: move |key: String| {
                                tracing::debug!(specialty = %key, "Specialty selected");
                                modal.write().form_mut().select_specialty(&key);
                            },
                            onblur: move |_| blur(modal, FieldId::Specialty),
                        }
                        SelectField {
                            id: FieldId::Practitioner.element_id().to_string(),
                            label: "Врач".to_string(),
                            options: practitioners.options().to_vec(),
                            selected: practitioners.selected().to_string(),
                            disabled: !practitioners.is_enabled(),
                            onchange: move |key: String| {
                                modal.write().form_mut().select_practitioner(&key);
                            },
                        }
                    }
                    TextField {
                        id: FieldId::Date.element_id().to_string(),
                        label: "Желаемая дата".to_string(),
                        input_type: "date".to_string(),
                        min: form.min_date(),
                        value: form.value(FieldId::Date).to_string(),
                        error: form.error(FieldId::Date).map(str::to_string),
                        required: true,
                        oninput: move |v: String| modal.write().form_mut().on_input(FieldId::Date, &v),
                        onblur: move |_| blur(modal, FieldId::Date),
                    }
                    TextArea {
                        id: FieldId::Comment.element_id().to_string(),
                        label: "Комментарий".to_string(),
                        placeholder: "Опишите симптомы или пожелания".to_string(),
                        value: form.value(FieldId::Comment).to_string(),
                        oninput: move |v: String| modal.write().form_mut().on_input(FieldId::Comment, &v),
                    }

                    div { class: "modal-actions",
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| {
                                close_booking(modal, CloseReason::Cancel);
                            },
                            "Отмена"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            id: "submitBtn".to_string(),
                            disabled: submitting,
                            onclick: submit,
                            if submitting {
                                span { class: "spinner", "aria-hidden": "true" }
                                span { "Отправка..." }
                            } else {
                                span { "Записаться" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn blur(mut modal: Signal<BookingModal>, id: FieldId) {
    modal.write().form_mut().on_blur(id, today());
}

/// The overlay only receives clicks that missed the content.
fn close_on_backdrop(mut modal: Signal<BookingModal>) {
    modal
        .write()
        .on_overlay_click(true, today(), &mut PageModalView);
}

fn specialty_options() -> Vec<SelectOption> {
    std::iter::once(SelectOption::placeholder(SPECIALTY_PLACEHOLDER))
        .chain(SPECIALTIES.iter().map(|s| SelectOption {
            value: s.key.to_string(),
            label: s.title.to_string(),
        }))
        .collect()
}

/// Validate, then hand the request to the client and report the outcome.
fn submit_booking<C>(mut modal: Signal<BookingModal>, notifier: Notifier, client: C)
where
    C: SubmissionClient + 'static,
{
    let messages = &landing_config().messages;
    let started = modal.write().begin_submission(today(), messages);
    let request = match started {
        Ok(request) => request,
        Err(Some((message, severity))) => {
            notifier.show(message, severity);
            return;
        }
        Err(None) => return,
    };

    spawn(async move {
        let result = client.submit(request).await;
        let (message, severity) =
            modal.write().complete_submission(result, today(), messages, &mut PageModalView);
        notifier.show(message, severity);
    });
}
