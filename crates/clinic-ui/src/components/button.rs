//! Button Components
//!
//! Button styles used across the page:
//! - Primary: booking actions, cyan gradient
//! - Outline: secondary actions on cards
//! - Ghost: cancel and other low-emphasis actions
//! - Emergency: the red emergency call button

use dioxus::prelude::*;

use crate::components::icon::{Icon, IconName};

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Main booking action
    #[default]
    Primary,
    /// Bordered button used on service and doctor cards
    Outline,
    /// Low-emphasis action
    Ghost,
    /// Emergency call
    Emergency,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Ghost => "btn btn-ghost",
            ButtonVariant::Emergency => "btn btn-emergency",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional element id
    #[props(default)]
    pub id: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Primary,
///         onclick: move |_| open_booking(),
///         "Записаться на приём"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let base_class = props.variant.class();
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        base_class.to_string()
    } else {
        format!("{} {}", base_class, extra_class)
    };
    let onclick = props.onclick;

    rsx! {
        button {
            id: props.id.clone(),
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact actions (close, menu toggle)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        "icon-btn".to_string()
    } else {
        format!("icon-btn {}", extra_class)
    };
    let onclick = props.onclick;

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |evt| {
                evt.stop_propagation();
                onclick.call(());
            },
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>, #[props(default)] class: Option<String>) -> Element {
    let class = match class {
        Some(extra) => format!("close-btn {extra}"),
        None => "close-btn".to_string(),
    };
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Закрыть".to_string(),
            class: class,
            Icon { name: IconName::X, size: 20 }
        }
    }
}
