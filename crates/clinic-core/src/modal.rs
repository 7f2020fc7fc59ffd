//! Booking modal controller.
//!
//! Owns the open flag and the form inside the modal. Opening and closing are
//! idempotent: repeating either call changes nothing and touches no view.
//!
//! The submit workflow is split around the async client call:
//! [`BookingModal::begin_submission`] validates and yields the request,
//! [`BookingModal::complete_submission`] records the result and says which
//! notification to show.

use std::time::Duration;

use chrono::NaiveDate;

use crate::config::PageMessages;
use crate::error::ClinicResult;
use crate::form::{BookingForm, Preselect, SubmitRejected};
use crate::notification::Severity;
use crate::submission::AppointmentRequest;

/// Imperative side of the modal that cannot be expressed as rendered state.
pub trait ModalView {
    /// Lock or restore scrolling of the page behind the modal.
    fn set_background_scroll_locked(&mut self, locked: bool);

    /// Move keyboard focus to the first text input after `delay`.
    fn focus_first_input(&mut self, delay: Duration);
}

/// What closed the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    CloseButton,
    Backdrop,
    Escape,
    Cancel,
    Submitted,
}

/// The single booking modal of the page.
#[derive(Debug, Clone)]
pub struct BookingModal {
    open: bool,
    form: BookingForm,
    focus_delay: Duration,
}

impl BookingModal {
    pub fn new(form: BookingForm, focus_delay: Duration) -> Self {
        Self {
            open: false,
            form,
            focus_delay,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Show the modal. Returns `false` if it was already open.
    pub fn open(&mut self, view: &mut impl ModalView) -> bool {
        if self.open {
            return false;
        }
        self.open = true;
        view.set_background_scroll_locked(true);
        view.focus_first_input(self.focus_delay);
        tracing::info!("Booking modal opened");
        true
    }

    /// Open the modal with a specialty or practitioner already chosen.
    pub fn open_with(&mut self, preselect: &Preselect, view: &mut impl ModalView) -> bool {
        let opened = self.open(view);
        self.form.preselect(preselect);
        opened
    }

    /// Hide the modal and reset the form. Returns `false` if already closed.
    pub fn close(
        &mut self,
        reason: CloseReason,
        today: NaiveDate,
        view: &mut impl ModalView,
    ) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        view.set_background_scroll_locked(false);
        self.form.reset(today);
        tracing::info!(?reason, "Booking modal closed");
        true
    }

    /// Validate the form and enter the submitting state.
    ///
    /// On rejection returns the notification to show, if any. A submit while
    /// one is already in flight is ignored silently.
    pub fn begin_submission(
        &mut self,
        today: NaiveDate,
        messages: &PageMessages,
    ) -> Result<AppointmentRequest, Option<(String, Severity)>> {
        match self.form.begin_submit(today) {
            Ok(request) => Ok(request),
            Err(SubmitRejected::InFlight) => Err(None),
            Err(SubmitRejected::Invalid(_)) => {
                Err(Some((messages.form_invalid.clone(), Severity::Error)))
            }
        }
    }

    /// Record the client's result and return the notification to show.
    ///
    /// Success closes the modal, unless the form was reset while the request
    /// was pending: the user may have reopened it and started typing again.
    /// Failure keeps the modal open with its values.
    pub fn complete_submission(
        &mut self,
        result: ClinicResult<()>,
        today: NaiveDate,
        messages: &PageMessages,
        view: &mut impl ModalView,
    ) -> (String, Severity) {
        let superseded = self.form.was_reset_in_flight();
        let succeeded = result.is_ok();
        self.form.finish_submit(result);

        if !succeeded {
            return (messages.submit_failed.clone(), Severity::Error);
        }
        if superseded {
            tracing::debug!("Submission finished after its form was reset");
        } else {
            self.close(CloseReason::Submitted, today, view);
        }
        (messages.submit_success.clone(), Severity::Success)
    }

    /// Keyboard handler; only Escape while open closes the modal.
    pub fn on_key(&mut self, key: &str, today: NaiveDate, view: &mut impl ModalView) -> bool {
        key == "Escape" && self.close(CloseReason::Escape, today, view)
    }

    /// Click on the overlay. Clicks inside the content do not close it.
    pub fn on_overlay_click(
        &mut self,
        target_is_backdrop: bool,
        today: NaiveDate,
        view: &mut impl ModalView,
    ) -> bool {
        target_is_backdrop && self.close(CloseReason::Backdrop, today, view)
    }

    /// CSS classes of the modal overlay.
    pub fn class(&self) -> &'static str {
        if self.open {
            "modal active"
        } else {
            "modal"
        }
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut BookingForm {
        &mut self.form
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClinicError;
    use crate::validation::{FieldId, FieldValidator, ValidationRules};

    #[derive(Default)]
    struct RecordingView {
        scroll_locked: Option<bool>,
        calls: usize,
        focus: Vec<Duration>,
    }

    impl ModalView for RecordingView {
        fn set_background_scroll_locked(&mut self, locked: bool) {
            self.scroll_locked = Some(locked);
            self.calls += 1;
        }

        fn focus_first_input(&mut self, delay: Duration) {
            self.focus.push(delay);
            self.calls += 1;
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
    }

    fn modal() -> BookingModal {
        let validator = FieldValidator::new(&ValidationRules::default()).unwrap();
        BookingModal::new(BookingForm::new(validator, today()), Duration::from_millis(100))
    }

    #[test]
    fn open_locks_scroll_and_focuses() {
        let mut modal = modal();
        let mut view = RecordingView::default();
        assert!(modal.open(&mut view));
        assert!(modal.is_open());
        assert_eq!(modal.class(), "modal active");
        assert_eq!(view.scroll_locked, Some(true));
        assert_eq!(view.focus, vec![Duration::from_millis(100)]);

        assert!(!modal.open(&mut view));
        assert_eq!(view.focus.len(), 1);
    }

    #[test]
    fn close_is_idempotent() {
        let mut modal = modal();
        let mut view = RecordingView::default();
        modal.open(&mut view);
        modal.form_mut().on_input(FieldId::Name, "Анна");
        modal.form_mut().on_blur(FieldId::Phone, today());

        assert!(modal.close(CloseReason::CloseButton, today(), &mut view));
        let calls = view.calls;
        assert!(!modal.close(CloseReason::CloseButton, today(), &mut view));
        assert_eq!(view.calls, calls);
        assert!(!modal.is_open());
        assert_eq!(view.scroll_locked, Some(false));
        assert_eq!(modal.form().value(FieldId::Name), "");
        assert!(modal.form().fields_with_errors().is_empty());
    }

    #[test]
    fn escape_only_while_open() {
        let mut modal = modal();
        let mut view = RecordingView::default();
        assert!(!modal.on_key("Escape", today(), &mut view));
        assert_eq!(view.calls, 0);
        modal.open(&mut view);
        assert!(!modal.on_key("Enter", today(), &mut view));
        assert!(modal.on_key("Escape", today(), &mut view));
        assert!(!modal.is_open());
    }

    #[test]
    fn content_clicks_keep_modal_open() {
        let mut modal = modal();
        let mut view = RecordingView::default();
        modal.open(&mut view);
        assert!(!modal.on_overlay_click(false, today(), &mut view));
        assert!(modal.is_open());
        assert!(modal.on_overlay_click(true, today(), &mut view));
        assert!(!modal.is_open());
    }

    #[test]
    fn open_with_preselects() {
        let mut modal = modal();
        let mut view = RecordingView::default();
        modal.open_with(&Preselect::specialty("pediatrics"), &mut view);
        assert_eq!(modal.form().value(FieldId::Practitioner), "volkova");
    }

    fn fill(modal: &mut BookingModal) {
        let form = modal.form_mut();
        form.on_input(FieldId::Name, "Иванов Петр");
        form.on_input(FieldId::Phone, "+7 (495) 123-45-67");
        form.select_specialty("cardiology");
    }

    #[test]
    fn invalid_submission_reports_form_error() {
        let messages = PageMessages::default();
        let mut modal = modal();
        let mut view = RecordingView::default();
        modal.open(&mut view);

        let rejected = modal.begin_submission(today(), &messages).unwrap_err();
        assert_eq!(rejected, Some((messages.form_invalid.clone(), Severity::Error)));
        assert!(modal.is_open());
        assert!(!modal.form().is_submitting());
    }

    #[test]
    fn repeated_submission_is_silent() {
        let messages = PageMessages::default();
        let mut modal = modal();
        let mut view = RecordingView::default();
        modal.open(&mut view);
        fill(&mut modal);

        assert!(modal.begin_submission(today(), &messages).is_ok());
        assert_eq!(modal.begin_submission(today(), &messages).unwrap_err(), None);
    }

    #[test]
    fn successful_submission_closes() {
        let messages = PageMessages::default();
        let mut modal = modal();
        let mut view = RecordingView::default();
        modal.open(&mut view);
        fill(&mut modal);
        modal.begin_submission(today(), &messages).unwrap();

        let notice = modal.complete_submission(Ok(()), today(), &messages, &mut view);
        assert_eq!(notice, (messages.submit_success.clone(), Severity::Success));
        assert!(!modal.is_open());
        assert_eq!(view.scroll_locked, Some(false));
        assert_eq!(modal.form().value(FieldId::Name), "");
        assert!(!modal.form().is_submitting());
    }

    #[test]
    fn failed_submission_stays_open() {
        let messages = PageMessages::default();
        let mut modal = modal();
        let mut view = RecordingView::default();
        modal.open(&mut view);
        fill(&mut modal);
        modal.begin_submission(today(), &messages).unwrap();

        let failure = Err(ClinicError::Submission("offline".to_string()));
        let notice = modal.complete_submission(failure, today(), &messages, &mut view);
        assert_eq!(notice, (messages.submit_failed.clone(), Severity::Error));
        assert!(modal.is_open());
        assert_eq!(modal.form().value(FieldId::Name), "Иванов Петр");
        assert!(!modal.form().is_submitting());
    }
}
