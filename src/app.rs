use clinic_core::cosmetic::Announcer;
use clinic_core::{BookingForm, BookingModal, NavigationController, NotificationCenter, SimulatedClient};
use dioxus::prelude::*;

use crate::context::{today, Notifier};
use crate::pages::Landing;
use crate::theme::GLOBAL_STYLES;
use crate::{field_validator, landing_config};

/// Root application component.
///
/// Owns the page-wide state (modal, notification slot, navigation, live
/// region) and provides it to every section through context.
#[component]
pub fn App() -> Element {
    let config = landing_config();

    // Set in main before launch; missing only if launched some other way
    let Some(validator) = field_validator() else {
        tracing::error!("Field validator not initialized");
        return rsx! {
            style { {GLOBAL_STYLES} }
            p { class: "startup-error", "Произошла ошибка. Пожалуйста, обновите страницу." }
        };
    };

    let modal = use_signal(|| {
        BookingModal::new(
            BookingForm::new(validator.clone(), today()),
            config.modal.focus_delay(),
        )
    });
    let center = use_signal(|| NotificationCenter::new(config.notifications));
    let announcer = use_signal(Announcer::default);
    let navigation = use_signal(|| NavigationController::new(config.navigation.clone()));

    use_context_provider(|| modal);
    use_context_provider(|| navigation);
    use_context_provider(|| Notifier::new(center, announcer));
    use_context_provider(|| SimulatedClient::new(config.submission.latency()));

    rsx! {
        style { {GLOBAL_STYLES} }
        Landing {}
    }
}
