//! Field validators for the appointment form.
//!
//! Patterns and messages come from [`ValidationRules`] so another locale can
//! be plugged in through configuration. The defaults target Russian names and
//! phone numbers.
//!
//! Rule order matters: the type-specific rule runs first and the required
//! check runs last, overwriting any earlier message. A required field that is
//! blank therefore always reports the "required" message.

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ClinicError, ClinicResult};

/// Fields of the appointment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    Name,
    Phone,
    Email,
    Date,
    Specialty,
    Practitioner,
    Comment,
}

impl FieldId {
    /// All fields in display order.
    pub const ALL: [FieldId; 7] = [
        FieldId::Name,
        FieldId::Phone,
        FieldId::Email,
        FieldId::Date,
        FieldId::Specialty,
        FieldId::Practitioner,
        FieldId::Comment,
    ];

    /// Whether the field must be filled before submitting.
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            FieldId::Name | FieldId::Phone | FieldId::Date | FieldId::Specialty
        )
    }

    /// Element id used by the page markup.
    pub fn element_id(&self) -> &'static str {
        match self {
            FieldId::Name => "patientName",
            FieldId::Phone => "patientPhone",
            FieldId::Email => "patientEmail",
            FieldId::Date => "appointmentDate",
            FieldId::Specialty => "serviceSelect",
            FieldId::Practitioner => "doctorSelect",
            FieldId::Comment => "patientComment",
        }
    }
}

/// Locale-specific messages shown next to invalid fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationMessages {
    pub name_too_short: String,
    pub name_alphabet: String,
    pub phone: String,
    pub email: String,
    pub date_in_past: String,
    pub date_unreadable: String,
    pub required: String,
}

impl Default for ValidationMessages {
    fn default() -> Self {
        Self {
            name_too_short: "Имя должно содержать минимум 2 символа".to_string(),
            name_alphabet: "Имя должно содержать только русские буквы".to_string(),
            phone: "Введите корректный номер телефона".to_string(),
            email: "Введите корректный email адрес".to_string(),
            date_in_past: "Дата не может быть в прошлом".to_string(),
            date_unreadable: "Введите корректную дату".to_string(),
            required: "Это поле обязательно для заполнения".to_string(),
        }
    }
}

/// Pattern-and-message configuration for every validated field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
    /// Minimum number of characters in a trimmed name
    pub name_min_chars: usize,
    pub name_pattern: String,
    pub phone_pattern: String,
    pub email_pattern: String,
    pub messages: ValidationMessages,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            name_min_chars: 2,
            name_pattern: r"(?i)^[а-яё\s-]+$".to_string(),
            phone_pattern:
                r"^(\+7|8)?[\s-]?\(?[0-9]{3}\)?[\s-]?[0-9]{3}[\s-]?[0-9]{2}[\s-]?[0-9]{2}$"
                    .to_string(),
            email_pattern: r"^[^\s@]+@[^\s@]+\.[^\s@]+$".to_string(),
            messages: ValidationMessages::default(),
        }
    }
}

/// Compiled validators built from [`ValidationRules`].
#[derive(Debug, Clone)]
pub struct FieldValidator {
    name_min_chars: usize,
    name: Regex,
    phone: Regex,
    email: Regex,
    messages: ValidationMessages,
}

fn compile(field: &'static str, pattern: &str) -> ClinicResult<Regex> {
    Regex::new(pattern).map_err(|source| ClinicError::InvalidPattern { field, source })
}

impl FieldValidator {
    /// Compile the configured patterns.
    pub fn new(rules: &ValidationRules) -> ClinicResult<Self> {
        Ok(Self {
            name_min_chars: rules.name_min_chars,
            name: compile("name", &rules.name_pattern)?,
            phone: compile("phone", &rules.phone_pattern)?,
            email: compile("email", &rules.email_pattern)?,
            messages: rules.messages.clone(),
        })
    }

    /// Validate a raw field value.
    ///
    /// Returns the error message to display, or `None` when the value is
    /// acceptable. `today` is the current calendar day used by the date rule.
    pub fn check(&self, field: FieldId, raw: &str, today: NaiveDate) -> Option<String> {
        let value = raw.trim();

        let mut error = match field {
            FieldId::Name => self.check_name(value),
            FieldId::Phone => {
                (!self.phone.is_match(value)).then(|| self.messages.phone.clone())
            }
            FieldId::Email => (!value.is_empty() && !self.email.is_match(value))
                .then(|| self.messages.email.clone()),
            FieldId::Date => self.check_date(value, today),
            FieldId::Specialty | FieldId::Practitioner | FieldId::Comment => None,
        };

        if field.is_required() && value.is_empty() {
            error = Some(self.messages.required.clone());
        }

        error
    }

    /// Message for a required-but-blank field.
    pub fn required_message(&self) -> &str {
        &self.messages.required
    }

    fn check_name(&self, value: &str) -> Option<String> {
        if value.chars().count() < self.name_min_chars {
            Some(self.messages.name_too_short.clone())
        } else if !self.name.is_match(value) {
            Some(self.messages.name_alphabet.clone())
        } else {
            None
        }
    }

    fn check_date(&self, value: &str, today: NaiveDate) -> Option<String> {
        if value.is_empty() {
            return None;
        }
        match parse_date(value) {
            Some(date) if date < today => Some(self.messages.date_in_past.clone()),
            Some(_) => None,
            None => Some(self.messages.date_unreadable.clone()),
        }
    }
}

/// Parse a date input value (`YYYY-MM-DD`).
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Format a date the way a date input expects it.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
