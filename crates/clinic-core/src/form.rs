//! Appointment form state and submission workflow.
//!
//! [`BookingForm`] is the form's view-model: the page renders field values,
//! inline errors, practitioner options and the submit control straight from
//! it, so the whole workflow runs without a document tree.
//!
//! Field lifecycle:
//!
//! ```text
//! untouched ──blur──► valid | invalid
//!     ▲                    │
//!     └──────input─────────┘   (error cleared, validity not reasserted)
//! ```
//!
//! Submission lifecycle:
//!
//! ```text
//! idle ──submit──► submitting ──ok──► succeeded
//!   │                  └──err──► failed
//!   └──invalid──► validation failed
//! ```
//!
//! A reset while submitting clears the fields but stays in `submitting`
//! until the pending request finishes, which then lands the fresh form in
//! `idle`.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};

use crate::catalog::{self, PractitionerSelect};
use crate::cosmetic::format_phone;
use crate::error::ClinicResult;
use crate::submission::AppointmentRequest;
use crate::validation::{format_date, parse_date, FieldId, FieldValidator};

/// Value and validation state of a single field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    /// Inline error message, at most one per field
    pub error: Option<String>,
    /// Set by blur validation, reset by input
    pub checked: bool,
}

impl FieldState {
    /// `Some(valid)` after a blur check, `None` while untouched.
    pub fn validity(&self) -> Option<bool> {
        self.checked.then_some(self.error.is_none())
    }
}

/// Where the submission workflow stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    ValidationFailed,
    Failed(String),
}

/// Why a submit attempt did not start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    /// A submission is already in flight
    InFlight,
    /// These fields failed validation
    Invalid(Vec<FieldId>),
}

/// Pre-selection applied when the modal is opened from a card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preselect {
    pub specialty: Option<String>,
    pub practitioner: Option<String>,
}

impl Preselect {
    pub fn specialty(key: &str) -> Self {
        Self {
            specialty: Some(key.to_string()),
            practitioner: None,
        }
    }

    pub fn practitioner(specialty: &str, practitioner: &str) -> Self {
        Self {
            specialty: Some(specialty.to_string()),
            practitioner: Some(practitioner.to_string()),
        }
    }
}

/// The appointment form.
#[derive(Debug, Clone)]
pub struct BookingForm {
    validator: FieldValidator,
    fields: BTreeMap<FieldId, FieldState>,
    practitioners: PractitionerSelect,
    submission: SubmissionState,
    /// The fields were reset after the pending request was sent
    reset_in_flight: bool,
    min_date: NaiveDate,
}

impl BookingForm {
    /// Create an empty form whose date defaults to tomorrow.
    pub fn new(validator: FieldValidator, today: NaiveDate) -> Self {
        let mut form = Self {
            validator,
            fields: BTreeMap::new(),
            practitioners: PractitionerSelect::default(),
            submission: SubmissionState::Idle,
            reset_in_flight: false,
            min_date: today,
        };
        form.reset(today);
        form
    }

    /// Reset every field to its default and clear all errors.
    ///
    /// A pending submission survives the reset, so the submit control stays
    /// disabled until [`finish_submit`](Self::finish_submit).
    pub fn reset(&mut self, today: NaiveDate) {
        self.fields = FieldId::ALL
            .iter()
            .map(|id| (*id, FieldState::default()))
            .collect();
        let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);
        self.field_mut(FieldId::Date).value = format_date(tomorrow);
        self.practitioners = PractitionerSelect::default();
        if self.is_submitting() {
            self.reset_in_flight = true;
        } else {
            self.submission = SubmissionState::Idle;
        }
        self.min_date = today;
    }

    pub fn field(&self, id: FieldId) -> &FieldState {
        // Every FieldId is inserted by reset()
        &self.fields[&id]
    }

    fn field_mut(&mut self, id: FieldId) -> &mut FieldState {
        self.fields.entry(id).or_default()
    }

    pub fn value(&self, id: FieldId) -> &str {
        &self.field(id).value
    }

    pub fn error(&self, id: FieldId) -> Option<&str> {
        self.field(id).error.as_deref()
    }

    /// Fields currently showing an error.
    pub fn fields_with_errors(&self) -> Vec<FieldId> {
        self.fields
            .iter()
            .filter(|(_, state)| state.error.is_some())
            .map(|(id, _)| *id)
            .collect()
    }

    /// Earliest bookable date, for the date input's `min`.
    pub fn min_date(&self) -> String {
        format_date(self.min_date)
    }

    /// Input event: store the value and clear the field's error.
    ///
    /// The phone field is re-rendered through the phone mask.
    pub fn on_input(&mut self, id: FieldId, value: &str) {
        let value = match id {
            FieldId::Phone => format_phone(value),
            _ => value.to_string(),
        };
        let field = self.field_mut(id);
        field.value = value;
        field.error = None;
        field.checked = false;
    }

    /// Blur event: validate the field. Returns whether it is valid.
    pub fn on_blur(&mut self, id: FieldId, today: NaiveDate) -> bool {
        let error = self.validator.check(id, self.value(id), today);
        if let Some(message) = &error {
            tracing::debug!(field = ?id, %message, "Field failed validation");
        }
        let valid = error.is_none();
        let field = self.field_mut(id);
        field.error = error;
        field.checked = true;
        valid
    }

    /// Specialty change: rebuild the practitioner select from scratch.
    pub fn select_specialty(&mut self, key: &str) {
        self.on_input(FieldId::Specialty, key);
        self.practitioners.repopulate(key);
        let selected = self.practitioners.selected().to_string();
        let practitioner = self.field_mut(FieldId::Practitioner);
        practitioner.value = selected;
        practitioner.error = None;
        practitioner.checked = false;
    }

    /// Practitioner change. Ignored when the key is not currently offered.
    pub fn select_practitioner(&mut self, key: &str) -> bool {
        if !self.practitioners.select(key) {
            tracing::debug!(practitioner = key, "Ignoring practitioner outside current options");
            return false;
        }
        self.on_input(FieldId::Practitioner, key);
        true
    }

    pub fn practitioners(&self) -> &PractitionerSelect {
        &self.practitioners
    }

    /// Apply a card's pre-selection.
    pub fn preselect(&mut self, preselect: &Preselect) {
        if let Some(specialty) = &preselect.specialty {
            if catalog::specialty(specialty).is_some() {
                self.select_specialty(specialty);
            }
        }
        if let Some(practitioner) = &preselect.practitioner {
            self.select_practitioner(practitioner);
        }
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    /// The submit control is disabled while a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionState::Submitting
    }

    /// Whether the pending request was sent from values that have since
    /// been reset.
    pub fn was_reset_in_flight(&self) -> bool {
        self.reset_in_flight
    }

    /// Validate the whole form and enter the submitting state.
    ///
    /// Every required field is validated, plus optional fields that hold a
    /// value. On success the returned request must be handed to a
    /// [`SubmissionClient`](crate::submission::SubmissionClient) and its
    /// result passed to [`finish_submit`](Self::finish_submit).
    pub fn begin_submit(&mut self, today: NaiveDate) -> Result<AppointmentRequest, SubmitRejected> {
        if self.is_submitting() {
            tracing::debug!("Submit ignored, request already in flight");
            return Err(SubmitRejected::InFlight);
        }

        let to_check: Vec<FieldId> = FieldId::ALL
            .into_iter()
            .filter(|id| id.is_required() || !self.value(*id).trim().is_empty())
            .collect();
        let invalid: Vec<FieldId> = to_check
            .into_iter()
            .filter(|id| !self.on_blur(*id, today))
            .collect();

        if !invalid.is_empty() {
            tracing::warn!(fields = ?invalid, "Appointment form has invalid fields");
            self.submission = SubmissionState::ValidationFailed;
            return Err(SubmitRejected::Invalid(invalid));
        }

        let Some(date) = parse_date(self.value(FieldId::Date)) else {
            // Unreachable after validation, kept as a guard
            self.submission = SubmissionState::ValidationFailed;
            return Err(SubmitRejected::Invalid(vec![FieldId::Date]));
        };

        self.submission = SubmissionState::Submitting;
        Ok(AppointmentRequest {
            name: self.value(FieldId::Name).trim().to_string(),
            phone: self.value(FieldId::Phone).trim().to_string(),
            email: self.optional(FieldId::Email),
            date,
            specialty: self.value(FieldId::Specialty).to_string(),
            practitioner: self.optional(FieldId::Practitioner),
            comment: self.optional(FieldId::Comment),
        })
    }

    /// Record the outcome of the submission call.
    ///
    /// If the form was reset while the request was pending, the outcome
    /// belongs to values no longer on screen and the form returns to idle.
    pub fn finish_submit(&mut self, result: ClinicResult<()>) -> &SubmissionState {
        if let Err(e) = &result {
            tracing::warn!("Appointment submission failed: {}", e);
        }
        let reset = std::mem::take(&mut self.reset_in_flight);
        self.submission = match result {
            _ if reset => SubmissionState::Idle,
            Ok(()) => SubmissionState::Succeeded,
            Err(e) => SubmissionState::Failed(e.to_string()),
        };
        &self.submission
    }

    fn optional(&self, id: FieldId) -> Option<String> {
        let value = self.value(id).trim();
        (!value.is_empty()).then(|| value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClinicError;
    use crate::validation::ValidationRules;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
    }

    fn form() -> BookingForm {
        BookingForm::new(FieldValidator::new(&ValidationRules::default()).unwrap(), today())
    }

    fn filled() -> BookingForm {
        let mut form = form();
        form.on_input(FieldId::Name, "Иванов Петр");
        form.on_input(FieldId::Phone, "+7 (495) 123-45-67");
        form.select_specialty("cardiology");
        form
    }

    #[test]
    fn date_defaults_to_tomorrow() {
        let form = form();
        assert_eq!(form.value(FieldId::Date), "2026-10-16");
        assert_eq!(form.min_date(), "2026-10-15");
    }

    #[test]
    fn blur_sets_and_input_clears_error() {
        let mut form = form();
        form.on_input(FieldId::Name, "И");
        assert_eq!(form.field(FieldId::Name).validity(), None);
        assert!(!form.on_blur(FieldId::Name, today()));
        assert_eq!(form.field(FieldId::Name).validity(), Some(false));
        assert!(form.error(FieldId::Name).is_some());

        form.on_input(FieldId::Name, "Иг");
        assert_eq!(form.error(FieldId::Name), None);
        assert_eq!(form.field(FieldId::Name).validity(), None);
        assert!(form.on_blur(FieldId::Name, today()));
    }

    #[test]
    fn repeated_blur_keeps_one_error() {
        let mut form = form();
        form.on_blur(FieldId::Phone, today());
        form.on_input(FieldId::Phone, "12");
        form.on_blur(FieldId::Phone, today());
        assert_eq!(form.error(FieldId::Phone), Some("Введите корректный номер телефона"));
        assert_eq!(form.fields_with_errors(), vec![FieldId::Phone]);
    }

    #[test]
    fn phone_input_is_masked() {
        let mut form = form();
        form.on_input(FieldId::Phone, "84951234567");
        assert_eq!(form.value(FieldId::Phone), "+7 (495) 123-45-67");
    }

    #[test]
    fn specialty_change_rebuilds_practitioners() {
        let mut form = form();
        form.select_specialty("cardiology");
        assert_eq!(form.value(FieldId::Practitioner), "ivanov");
        assert!(form.practitioners().is_enabled());

        form.select_specialty("");
        assert_eq!(form.value(FieldId::Practitioner), "");
        assert_eq!(form.practitioners().options().len(), 1);
        assert!(!form.practitioners().is_enabled());
    }

    #[test]
    fn invalid_submit_reports_fields() {
        let mut form = form();
        let err = form.begin_submit(today()).unwrap_err();
        assert_eq!(
            err,
            SubmitRejected::Invalid(vec![FieldId::Name, FieldId::Phone, FieldId::Specialty])
        );
        assert_eq!(form.submission(), &SubmissionState::ValidationFailed);
        assert_eq!(form.error(FieldId::Name), Some("Это поле обязательно для заполнения"));
        assert!(!form.is_submitting());
    }

    #[test]
    fn malformed_optional_email_blocks_submit() {
        let mut form = filled();
        form.on_input(FieldId::Email, "nope");
        assert_eq!(
            form.begin_submit(today()).unwrap_err(),
            SubmitRejected::Invalid(vec![FieldId::Email])
        );
    }

    #[test]
    fn valid_submit_builds_request() {
        let mut form = filled();
        form.on_input(FieldId::Comment, "  Повторный приём ");
        let request = form.begin_submit(today()).unwrap();
        assert!(form.is_submitting());
        assert_eq!(request.name, "Иванов Петр");
        assert_eq!(request.date, NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        assert_eq!(request.practitioner.as_deref(), Some("ivanov"));
        assert_eq!(request.email, None);
        assert_eq!(request.comment.as_deref(), Some("Повторный приём"));

        assert_eq!(form.begin_submit(today()).unwrap_err(), SubmitRejected::InFlight);
    }

    #[test]
    fn failed_submission_keeps_values() {
        let mut form = filled();
        form.begin_submit(today()).unwrap();
        let state = form.finish_submit(Err(ClinicError::Submission("offline".to_string())));
        assert_eq!(state, &SubmissionState::Failed("Submission failed: offline".to_string()));
        assert!(!form.is_submitting());
        assert_eq!(form.value(FieldId::Name), "Иванов Петр");
    }

    #[test]
    fn preselect_practitioner_from_card() {
        let mut form = form();
        form.preselect(&Preselect::practitioner("neurology", "smirnova"));
        assert_eq!(form.value(FieldId::Specialty), "neurology");
        assert_eq!(form.value(FieldId::Practitioner), "smirnova");

        form.preselect(&Preselect::specialty("dentistry"));
        assert_eq!(form.value(FieldId::Specialty), "neurology");
    }

    #[test]
    fn reset_clears_everything() {
        let mut form = filled();
        form.on_blur(FieldId::Email, today());
        form.on_input(FieldId::Date, "2020-01-01");
        form.on_blur(FieldId::Date, today());
        form.reset(today());
        assert_eq!(form.value(FieldId::Name), "");
        assert!(form.fields_with_errors().is_empty());
        assert!(!form.practitioners().is_enabled());
        assert_eq!(form.value(FieldId::Date), "2026-10-16");
        assert_eq!(form.submission(), &SubmissionState::Idle);
    }

    #[test]
    fn reset_keeps_pending_submission() {
        let mut form = filled();
        form.begin_submit(today()).unwrap();
        form.reset(today());
        assert_eq!(form.value(FieldId::Name), "");
        assert!(form.is_submitting());
        assert!(form.was_reset_in_flight());

        form.on_input(FieldId::Name, "Анна Смирнова");
        assert_eq!(form.finish_submit(Ok(())), &SubmissionState::Idle);
        assert!(!form.was_reset_in_flight());
        assert_eq!(form.value(FieldId::Name), "Анна Смирнова");
    }
}
