//! Form Field Components
//!
//! Inputs, textarea and select used by the booking form. Each field renders
//! its label, the control and, when present, exactly one inline error
//! message directly after the control.

use clinic_core::SelectOption;
use dioxus::prelude::*;

use crate::components::icon::{Icon, IconName};

/// Properties for the TextField component
#[derive(Clone, PartialEq, Props)]
pub struct TextFieldProps {
    /// Element id, also used for label association
    pub id: String,
    /// Input label text
    pub label: String,
    /// Current input value
    pub value: String,
    /// Handler called on every input event
    pub oninput: EventHandler<String>,
    /// Handler called when the field loses focus
    pub onblur: EventHandler<()>,
    /// Inline error message
    #[props(default)]
    pub error: Option<String>,
    /// Input type (text, tel, email, date)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default = false)]
    pub required: bool,
    /// Minimum value, used by date inputs
    #[props(default)]
    pub min: Option<String>,
}

/// Single-line input with inline error
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TextField {
///         id: "patientName".to_string(),
///         label: "ФИО".to_string(),
///         value: form.value(FieldId::Name).to_string(),
///         error: form.error(FieldId::Name).map(str::to_string),
///         oninput: move |v: String| booking.write().form_mut().on_input(FieldId::Name, &v),
///         onblur: move |_| { booking.write().form_mut().on_blur(FieldId::Name, today()); },
///         required: true,
///     }
/// }
/// ```
#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    let input_class = input_class(props.error.is_some());
    let oninput = props.oninput;
    let onblur = props.onblur;

    rsx! {
        div { class: "form-group",
            FieldLabel { for_id: props.id.clone(), label: props.label.clone(), required: props.required }
            input {
                id: "{props.id}",
                name: "{props.id}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                min: props.min.clone(),
                "aria-invalid": props.error.is_some(),
                oninput: move |e| oninput.call(e.value()),
                onblur: move |_| onblur.call(()),
            }
            if let Some(message) = &props.error {
                FieldError { message: message.clone() }
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub id: String,
    pub label: String,
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Number of visible rows
    #[props(default = 3)]
    pub rows: u32,
}

/// Multi-line input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let oninput = props.oninput;
    rsx! {
        div { class: "form-group",
            FieldLabel { for_id: props.id.clone(), label: props.label.clone(), required: false }
            textarea {
                id: "{props.id}",
                name: "{props.id}",
                class: "form-input",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                value: "{props.value}",
                oninput: move |e| oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the SelectField component
#[derive(Clone, PartialEq, Props)]
pub struct SelectFieldProps {
    pub id: String,
    pub label: String,
    /// All options, placeholder first
    pub options: Vec<SelectOption>,
    /// Value of the selected option
    pub selected: String,
    pub onchange: EventHandler<String>,
    #[props(default)]
    pub onblur: Option<EventHandler<()>>,
    #[props(default)]
    pub error: Option<String>,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default = false)]
    pub required: bool,
}

/// Select with inline error
#[component]
pub fn SelectField(props: SelectFieldProps) -> Element {
    let select_class = input_class(props.error.is_some());
    let onchange = props.onchange;
    let onblur = props.onblur;

    rsx! {
        div { class: "form-group",
            FieldLabel { for_id: props.id.clone(), label: props.label.clone(), required: props.required }
            select {
                id: "{props.id}",
                name: "{props.id}",
                class: "{select_class}",
                disabled: props.disabled,
                required: props.required,
                onchange: move |e| onchange.call(e.value()),
                onblur: move |_| {
                    if let Some(handler) = &onblur {
                        handler.call(());
                    }
                },
                for option in props.options.iter() {
                    option {
                        key: "{option.value}",
                        value: "{option.value}",
                        selected: option.value == props.selected,
                        "{option.label}"
                    }
                }
            }
            if let Some(message) = &props.error {
                FieldError { message: message.clone() }
            }
        }
    }
}

#[component]
fn FieldLabel(for_id: String, label: String, required: bool) -> Element {
    rsx! {
        label { class: "form-label", r#for: "{for_id}",
            "{label}"
            if required {
                span { class: "required-mark", " *" }
            }
        }
    }
}

/// Inline error shown after an invalid control
#[component]
pub fn FieldError(message: String) -> Element {
    rsx! {
        div { class: "error-message", role: "alert",
            Icon { name: IconName::AlertCircle, size: 16 }
            span { "{message}" }
        }
    }
}

fn input_class(has_error: bool) -> &'static str {
    if has_error {
        "form-input error"
    } else {
        "form-input"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_state_class() {
        assert_eq!(input_class(true), "form-input error");
        assert_eq!(input_class(false), "form-input");
    }
}
