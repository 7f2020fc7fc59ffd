//! Page state context and the Dioxus side of the core view traits.
//!
//! ## Usage
//!
//! ```ignore
//! // In any section component
//! let modal = use_booking_modal();
//! let notifier = use_notifier();
//!
//! notifier.show("Соединение восстановлено", Severity::Success);
//! ```

use std::time::Duration;

use chrono::NaiveDate;
use clinic_core::cosmetic::Announcer;
use clinic_core::timer::sleep_unless_cancelled;
use clinic_core::{
    BookingModal, LifecycleStep, ModalView, NavigationController, NavigationView,
    NotificationCenter, NotificationId, NotificationView, Preselect, Severity, SimulatedClient,
};
use dioxus::prelude::*;
use tokio_util::sync::CancellationToken;

use crate::landing_config;

/// Local calendar date, used for date validation and defaults.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Hook to access the booking modal state.
pub fn use_booking_modal() -> Signal<BookingModal> {
    use_context::<Signal<BookingModal>>()
}

/// Hook to access the navigation state.
pub fn use_navigation() -> Signal<NavigationController> {
    use_context::<Signal<NavigationController>>()
}

/// Hook to access the notification slot and live region.
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>()
}

/// Hook to access the submission client.
pub fn use_submission_client() -> SimulatedClient {
    use_context::<SimulatedClient>()
}

/// Handle to the single notification slot and the screen reader announcer.
///
/// Lifecycle timers are spawned with `spawn_forever` so they outlive the
/// component that triggered the notification.
#[derive(Clone, Copy, PartialEq)]
pub struct Notifier {
    center: Signal<NotificationCenter>,
    announcer: Signal<Announcer>,
}

impl Notifier {
    pub fn new(center: Signal<NotificationCenter>, announcer: Signal<Announcer>) -> Self {
        Self { center, announcer }
    }

    /// Show a notification, replacing the current one, and announce it.
    pub fn show(&self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        let mut view = *self;
        let mut center = self.center;
        center.write().show(message.clone(), severity, &mut view);
        self.announce(message);
    }

    /// Dismiss the current notification.
    pub fn dismiss(&self) {
        let mut view = *self;
        let mut center = self.center;
        center.write().dismiss(&mut view);
    }

    /// Put `message` in the live region and clear it after a short delay.
    pub fn announce(&self, message: impl Into<String>) {
        let mut announcer = self.announcer;
        let generation = announcer.write().announce(message);
        let delay = landing_config().announcer_clear();
        spawn_forever(async move {
            tokio::time::sleep(delay).await;
            announcer.write().clear(generation);
        });
    }

    pub fn center(&self) -> Signal<NotificationCenter> {
        self.center
    }

    pub fn announcer(&self) -> Signal<Announcer> {
        self.announcer
    }
}

impl NotificationView for Notifier {
    fn schedule(
        &mut self,
        id: NotificationId,
        step: LifecycleStep,
        delay: Duration,
        cancel: CancellationToken,
    ) {
        let mut view = *self;
        let mut center = self.center;
        spawn_forever(async move {
            if sleep_unless_cancelled(delay, &cancel).await {
                center.write().advance(id, step, &mut view);
            }
        });
    }
}

/// Modal effects that live outside the rendered tree.
pub struct PageModalView;

impl ModalView for PageModalView {
    fn set_background_scroll_locked(&mut self, locked: bool) {
        let overflow = if locked { "hidden" } else { "" };
        document::eval(&format!("document.body.style.overflow = '{overflow}';"));
    }

    fn focus_first_input(&mut self, delay: Duration) {
        document::eval(&format!(
            "setTimeout(() => {{ const el = document.getElementById('patientName'); if (el) el.focus(); }}, {});",
            delay.as_millis()
        ));
    }
}

/// Smooth scrolling of the page window.
pub struct PageNavigationView;

impl NavigationView for PageNavigationView {
    fn scroll_to(&mut self, top: f64) {
        document::eval(&format!(
            "window.scrollTo({{ top: {top}, behavior: 'smooth' }});"
        ));
    }
}

/// Open the booking modal, optionally pre-filled from a card.
pub fn open_booking(mut modal: Signal<BookingModal>, notifier: Notifier, preselect: Option<Preselect>) {
    let mut view = PageModalView;
    let opened = match &preselect {
        Some(preselect) => modal.write().open_with(preselect, &mut view),
        None => modal.write().open(&mut view),
    };
    if opened {
        notifier.announce(landing_config().messages.modal_opened.clone());
    }
}

/// Close the booking modal for `reason`.
pub fn close_booking(mut modal: Signal<BookingModal>, reason: clinic_core::CloseReason) -> bool {
    modal.write().close(reason, today(), &mut PageModalView)
}
