//! End-to-end booking scenarios against the core controllers.
//!
//! Timers run on tokio's paused clock, so the 2s submission latency and the
//! 5s notification timeout complete instantly but in the right order.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{Days, Local, NaiveDate};
use clinic_core::timer::sleep_unless_cancelled;
use clinic_core::{
    BookingForm, BookingModal, ClinicError, ClinicResult, CloseReason, FieldId, FieldValidator,
    LandingConfig, LifecycleStep, ModalView, NotificationCenter, NotificationId, NotificationView,
    Phase, Severity, SimulatedClient, SubmissionClient, SubmissionState, SubmitRejected,
};
use tokio_util::sync::CancellationToken;

// ============================================================================
// Test views
// ============================================================================

#[derive(Default)]
struct NullModalView;

impl ModalView for NullModalView {
    fn set_background_scroll_locked(&mut self, _locked: bool) {}
    fn focus_first_input(&mut self, _delay: Duration) {}
}

/// Runs notification timers as tokio tasks.
#[derive(Clone)]
struct TokioNotificationView {
    center: Arc<Mutex<NotificationCenter>>,
}

impl NotificationView for TokioNotificationView {
    fn schedule(
        &mut self,
        id: NotificationId,
        step: LifecycleStep,
        delay: Duration,
        cancel: CancellationToken,
    ) {
        let mut view = self.clone();
        tokio::spawn(async move {
            if sleep_unless_cancelled(delay, &cancel).await {
                let center = view.center.clone();
                center.lock().unwrap().advance(id, step, &mut view);
            }
        });
    }
}

impl TokioNotificationView {
    fn new() -> Self {
        Self {
            center: Arc::new(Mutex::new(NotificationCenter::default())),
        }
    }

    fn show(&self, message: &str, severity: Severity) -> NotificationId {
        let mut view = self.clone();
        self.center.lock().unwrap().show(message, severity, &mut view)
    }

    fn dismiss(&self) -> bool {
        let mut view = self.clone();
        self.center.lock().unwrap().dismiss(&mut view)
    }

    fn current(&self) -> Option<(String, Phase)> {
        self.center
            .lock()
            .unwrap()
            .current()
            .map(|n| (n.message.clone(), n.phase))
    }
}

struct FailingClient;

impl SubmissionClient for FailingClient {
    async fn submit(&self, _request: clinic_core::AppointmentRequest) -> ClinicResult<()> {
        tokio::time::sleep(Duration::from_millis(500)).await;
        Err(ClinicError::Submission("network unreachable".to_string()))
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn modal() -> BookingModal {
    let config = LandingConfig::default();
    let validator = FieldValidator::new(&config.validation).unwrap();
    BookingModal::new(BookingForm::new(validator, today()), config.modal.focus_delay())
}

fn fill_valid(form: &mut BookingForm) {
    let tomorrow = today().checked_add_days(Days::new(1)).unwrap();
    form.on_input(FieldId::Name, "Иванов Петр");
    form.on_input(FieldId::Phone, "+7 (495) 123-45-67");
    form.on_input(FieldId::Date, &tomorrow.format("%Y-%m-%d").to_string());
    form.select_specialty("cardiology");
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test(start_paused = true)]
async fn valid_booking_submits_and_closes() {
    let messages = LandingConfig::default().messages;
    let notifications = TokioNotificationView::new();
    let mut modal = modal();
    let mut view = NullModalView;

    modal.open(&mut view);
    fill_valid(modal.form_mut());
    assert_eq!(modal.form().value(FieldId::Practitioner), "ivanov");

    let request = modal.begin_submission(today(), &messages).unwrap();
    assert!(modal.form().is_submitting());

    let client = SimulatedClient::new(Duration::from_millis(2000));
    let started = tokio::time::Instant::now();
    let result = client.submit(request).await;
    assert!(started.elapsed() >= Duration::from_millis(2000));

    let (message, severity) = modal.complete_submission(result, today(), &messages, &mut view);
    assert_eq!(severity, Severity::Success);
    notifications.show(&message, severity);

    assert!(!modal.is_open());
    assert!(!modal.form().is_submitting());
    assert_eq!(modal.form().value(FieldId::Name), "");
    assert_eq!(modal.form().submission(), &SubmissionState::Idle);

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(
        notifications.current(),
        Some((messages.submit_success.clone(), Phase::Shown))
    );
}

#[tokio::test(start_paused = true)]
async fn past_date_blocks_submit() {
    let mut modal = modal();
    let mut view = NullModalView;
    modal.open(&mut view);
    fill_valid(modal.form_mut());

    let yesterday = today().checked_sub_days(Days::new(1)).unwrap();
    modal
        .form_mut()
        .on_input(FieldId::Date, &yesterday.format("%Y-%m-%d").to_string());
    assert!(!modal.form_mut().on_blur(FieldId::Date, today()));
    assert_eq!(
        modal.form().error(FieldId::Date),
        Some("Дата не может быть в прошлом")
    );

    let rejected = modal.form_mut().begin_submit(today()).unwrap_err();
    assert_eq!(rejected, SubmitRejected::Invalid(vec![FieldId::Date]));
    assert!(modal.is_open());
    assert!(!modal.form().is_submitting());
}

#[test]
fn specialty_cleared_resets_practitioner() {
    let mut modal = modal();
    let form = modal.form_mut();
    form.select_specialty("cardiology");
    assert!(form.select_practitioner("ivanov"));
    form.select_specialty("");

    let select = form.practitioners();
    assert_eq!(select.options().len(), 1);
    assert_eq!(select.options()[0].value, "");
    assert!(!select.is_enabled());
    assert_eq!(form.value(FieldId::Practitioner), "");
}

#[tokio::test(start_paused = true)]
async fn double_submit_is_ignored() {
    let mut modal = modal();
    let mut view = NullModalView;
    modal.open(&mut view);
    fill_valid(modal.form_mut());

    let first = modal.form_mut().begin_submit(today());
    assert!(first.is_ok());
    tokio::time::sleep(Duration::from_millis(500)).await;
    let second = modal.form_mut().begin_submit(today());
    assert_eq!(second.unwrap_err(), SubmitRejected::InFlight);
    assert!(modal.form().is_submitting());
}

#[tokio::test(start_paused = true)]
async fn failed_submission_keeps_modal_open() {
    let messages = LandingConfig::default().messages;
    let mut modal = modal();
    let mut view = NullModalView;
    modal.open(&mut view);
    fill_valid(modal.form_mut());

    let request = modal.begin_submission(today(), &messages).unwrap();
    let result = FailingClient.submit(request).await;
    let notice = modal.complete_submission(result, today(), &messages, &mut view);

    assert_eq!(notice, (messages.submit_failed.clone(), Severity::Error));
    assert!(modal.is_open());
    assert!(matches!(modal.form().submission(), SubmissionState::Failed(_)));
    assert_eq!(modal.form().value(FieldId::Name), "Иванов Петр");
    // The user can retry
    assert!(modal.begin_submission(today(), &messages).is_ok());
}

#[test]
fn invalid_booking_shows_form_error() {
    let messages = LandingConfig::default().messages;
    let mut modal = modal();
    let mut view = NullModalView;
    modal.open(&mut view);
    modal.form_mut().on_input(FieldId::Name, "Иванов Петр");

    let rejected = modal.begin_submission(today(), &messages).unwrap_err();
    assert_eq!(rejected, Some((messages.form_invalid.clone(), Severity::Error)));
    assert!(modal.is_open());
    assert_eq!(
        modal.form().error(FieldId::Phone),
        Some("Это поле обязательно для заполнения")
    );
}

#[tokio::test(start_paused = true)]
async fn closing_mid_submission_keeps_submit_locked() {
    let messages = LandingConfig::default().messages;
    let client = SimulatedClient::new(Duration::from_millis(2000));
    let mut modal = modal();
    let mut view = NullModalView;

    modal.open(&mut view);
    fill_valid(modal.form_mut());
    let first = modal.begin_submission(today(), &messages).unwrap();
    let pending = tokio::spawn({
        let client = client.clone();
        async move { client.submit(first).await }
    });

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(modal.close(CloseReason::Cancel, today(), &mut view));
    assert_eq!(modal.form().value(FieldId::Name), "");
    assert!(modal.form().is_submitting());

    // Reopen and fill again while the first request is still pending
    modal.open(&mut view);
    fill_valid(modal.form_mut());
    modal.form_mut().on_input(FieldId::Name, "Смирнова Анна");
    assert_eq!(modal.begin_submission(today(), &messages).unwrap_err(), None);

    let result = pending.await.unwrap();
    let (message, severity) = modal.complete_submission(result, today(), &messages, &mut view);
    assert_eq!((message.as_str(), severity), (messages.submit_success.as_str(), Severity::Success));

    // The first completion neither closes nor clears the reopened form
    assert!(modal.is_open());
    assert_eq!(modal.form().value(FieldId::Name), "Смирнова Анна");
    assert_eq!(modal.form().submission(), &SubmissionState::Idle);

    // Its own submission now goes through and guards against a repeat
    let second = modal.begin_submission(today(), &messages).unwrap();
    assert_eq!(second.name, "Смирнова Анна");
    assert_eq!(modal.begin_submission(today(), &messages).unwrap_err(), None);
    let result = client.submit(second).await;
    modal.complete_submission(result, today(), &messages, &mut view);
    assert!(!modal.is_open());
}

#[test]
fn closing_twice_matches_closing_once() {
    let mut once = modal();
    let mut twice = modal();
    let mut view = NullModalView;
    for modal in [&mut once, &mut twice] {
        modal.open(&mut view);
        modal.form_mut().on_input(FieldId::Name, "Анна");
        modal.form_mut().on_blur(FieldId::Phone, today());
    }

    once.close(CloseReason::Cancel, today(), &mut view);
    twice.close(CloseReason::Cancel, today(), &mut view);
    twice.close(CloseReason::Cancel, today(), &mut view);

    assert_eq!(once.is_open(), twice.is_open());
    for id in FieldId::ALL {
        assert_eq!(once.form().field(id), twice.form().field(id));
    }
}

// ============================================================================
// Notification lifecycle on a real timer
// ============================================================================

#[tokio::test(start_paused = true)]
async fn notification_auto_hides() {
    let notifications = TokioNotificationView::new();
    notifications.show("Соединение восстановлено", Severity::Success);

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(notifications.current().unwrap().1, Phase::Entering);
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(notifications.current().unwrap().1, Phase::Shown);

    tokio::time::sleep(Duration::from_millis(4900)).await;
    assert_eq!(notifications.current().unwrap().1, Phase::Leaving);
    tokio::time::sleep(Duration::from_millis(350)).await;
    assert!(notifications.current().is_none());
}

#[tokio::test(start_paused = true)]
async fn manual_dismiss_beats_timer() {
    let notifications = TokioNotificationView::new();
    notifications.show("Нет соединения с интернетом", Severity::Error);
    tokio::time::sleep(Duration::from_secs(1)).await;

    assert!(notifications.dismiss());
    tokio::time::sleep(Duration::from_millis(350)).await;
    assert!(notifications.current().is_none());

    // The cancelled auto-hide never fires against a newer notification
    notifications.show("Экстренная служба", Severity::Info);
    tokio::time::sleep(Duration::from_millis(3800)).await;
    assert_eq!(notifications.current().unwrap().1, Phase::Shown);
}

#[tokio::test(start_paused = true)]
async fn show_keeps_a_single_notification() {
    let notifications = TokioNotificationView::new();
    notifications.show("first", Severity::Info);
    tokio::time::sleep(Duration::from_secs(3)).await;
    notifications.show("second", Severity::Error);

    assert_eq!(notifications.current().unwrap().0, "second");

    // The first notification's auto-hide (due at 5s) must not touch the second
    tokio::time::sleep(Duration::from_millis(2500)).await;
    assert_eq!(
        notifications.current(),
        Some(("second".to_string(), Phase::Shown))
    );
}
