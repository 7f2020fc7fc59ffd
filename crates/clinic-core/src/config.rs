//! Landing page configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! yields the stock Russian-language page.
//!
//! ```json
//! {
//!   "log_level": "debug",
//!   "submission": { "latency_ms": 500 },
//!   "notifications": { "auto_hide_ms": 8000 }
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::CounterSpec;
use crate::error::{ClinicError, ClinicResult};
use crate::validation::{FieldValidator, ValidationRules};

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
    pub navigation: NavigationConfig,
    pub modal: ModalConfig,
    pub notifications: NotificationTimings,
    pub submission: SubmissionConfig,
    pub animations: AnimationConfig,
    pub status: StatusConfig,
    pub messages: PageMessages,
    pub validation: ValidationRules,
    /// How long an announcement stays in the live region
    pub announcer_clear_ms: u64,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            navigation: NavigationConfig::default(),
            modal: ModalConfig::default(),
            notifications: NotificationTimings::default(),
            submission: SubmissionConfig::default(),
            animations: AnimationConfig::default(),
            status: StatusConfig::default(),
            messages: PageMessages::default(),
            validation: ValidationRules::default(),
            announcer_clear_ms: 1000,
        }
    }
}

impl LandingConfig {
    /// Load a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> ClinicResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&raw)
    }

    /// Parse and validate a JSON config.
    pub fn from_json(raw: &str) -> ClinicResult<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check ranges and compile the validation patterns.
    pub fn validate(&self) -> ClinicResult<()> {
        for (name, p) in [
            ("status.flip_probability", self.status.flip_probability),
            ("status.online_probability", self.status.online_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(ClinicError::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {p}"
                )));
            }
        }
        if self.status.interval_secs == 0 {
            return Err(ClinicError::InvalidConfig(
                "status.interval_secs must be positive".to_string(),
            ));
        }
        if self.navigation.header_offset < 0.0 {
            return Err(ClinicError::InvalidConfig(
                "navigation.header_offset must not be negative".to_string(),
            ));
        }
        FieldValidator::new(&self.validation)?;
        Ok(())
    }

    pub fn announcer_clear(&self) -> Duration {
        Duration::from_millis(self.announcer_clear_ms)
    }
}

/// Navigation bar settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Height of the fixed header subtracted from anchor targets
    pub header_offset: f64,
    /// Scroll position past which the navbar turns opaque
    pub scrolled_threshold: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            scrolled_threshold: 100.0,
        }
    }
}

/// Booking modal settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    /// Delay before focusing the first input, lets the transition start
    pub focus_delay_ms: u64,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self { focus_delay_ms: 100 }
    }
}

impl ModalConfig {
    pub fn focus_delay(&self) -> Duration {
        Duration::from_millis(self.focus_delay_ms)
    }
}

/// Notification lifecycle timings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationTimings {
    /// Delay before the entrance transition
    pub enter_ms: u64,
    /// Time until automatic dismissal
    pub auto_hide_ms: u64,
    /// Length of the exit transition before removal
    pub exit_ms: u64,
}

impl Default for NotificationTimings {
    fn default() -> Self {
        Self {
            enter_ms: 100,
            auto_hide_ms: 5000,
            exit_ms: 300,
        }
    }
}

impl NotificationTimings {
    pub fn enter(&self) -> Duration {
        Duration::from_millis(self.enter_ms)
    }

    pub fn auto_hide(&self) -> Duration {
        Duration::from_millis(self.auto_hide_ms)
    }

    pub fn exit(&self) -> Duration {
        Duration::from_millis(self.exit_ms)
    }
}

/// Appointment submission settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    /// Latency of the simulated booking service
    pub latency_ms: u64,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self { latency_ms: 2000 }
    }
}

impl SubmissionConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

/// Reveal and counter animations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Extra transition delay per card index
    pub reveal_stagger_ms: u64,
    /// Hero statistics
    pub counters: Vec<CounterSpec>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            reveal_stagger_ms: 100,
            counters: vec![
                CounterSpec::Animated {
                    label: "Довольных пациентов".to_string(),
                    target: 15_000,
                    duration_ms: 2000,
                    suffix: "+".to_string(),
                    grouped: true,
                },
                CounterSpec::Animated {
                    label: "Лет опыта".to_string(),
                    target: 12,
                    duration_ms: 1500,
                    suffix: String::new(),
                    grouped: false,
                },
                CounterSpec::Static {
                    label: "Экстренная помощь".to_string(),
                    text: "24/7".to_string(),
                },
            ],
        }
    }
}

impl AnimationConfig {
    pub fn reveal_stagger(&self) -> Duration {
        Duration::from_millis(self.reveal_stagger_ms)
    }
}

/// Simulated doctor availability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    pub interval_secs: u64,
    /// Chance per tick that a badge re-rolls
    pub flip_probability: f64,
    /// Chance that a re-rolled badge comes up online
    pub online_probability: f64,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            interval_secs: 30,
            flip_probability: 0.1,
            online_probability: 0.7,
        }
    }
}

impl StatusConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

/// Notification texts for page-level events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMessages {
    pub form_invalid: String,
    pub submit_success: String,
    pub submit_failed: String,
    pub runtime_error: String,
    pub online: String,
    pub offline: String,
    pub emergency: String,
    pub emergency_confirm: String,
    pub emergency_phone: String,
    pub modal_opened: String,
}

impl Default for PageMessages {
    fn default() -> Self {
        Self {
            form_invalid: "Пожалуйста, исправьте ошибки в форме".to_string(),
            submit_success:
                "Ваша заявка успешно отправлена! Мы свяжемся с вами в ближайшее время."
                    .to_string(),
            submit_failed: "Не удалось отправить заявку. Попробуйте ещё раз.".to_string(),
            runtime_error: "Произошла ошибка. Пожалуйста, обновите страницу.".to_string(),
            online: "Соединение восстановлено".to_string(),
            offline: "Нет соединения с интернетом".to_string(),
            emergency: "Экстренная служба: +7 (495) 911-22-33".to_string(),
            emergency_confirm: "Хотите позвонить в экстренную службу?".to_string(),
            emergency_phone: "+74959112233".to_string(),
            modal_opened: "Открыта форма записи на приём".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let config = LandingConfig::from_json("{}").unwrap();
        assert_eq!(config, LandingConfig::default());
        assert_eq!(config.notifications.auto_hide(), Duration::from_secs(5));
        assert_eq!(config.submission.latency(), Duration::from_secs(2));
        assert_eq!(config.navigation.header_offset, 80.0);
    }

    #[test]
    fn partial_override() {
        let config = LandingConfig::from_json(
            r#"{ "submission": { "latency_ms": 10 }, "status": { "interval_secs": 5 } }"#,
        )
        .unwrap();
        assert_eq!(config.submission.latency_ms, 10);
        assert_eq!(config.status.interval_secs, 5);
        assert_eq!(config.status.flip_probability, 0.1);
    }

    #[test]
    fn rejects_bad_probability() {
        let err =
            LandingConfig::from_json(r#"{ "status": { "flip_probability": 1.5 } }"#).unwrap_err();
        assert!(matches!(err, ClinicError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_bad_pattern() {
        let err = LandingConfig::from_json(r#"{ "validation": { "name_pattern": "[" } }"#)
            .unwrap_err();
        assert!(matches!(err, ClinicError::InvalidPattern { field: "name", .. }));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = LandingConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ClinicError::ConfigParse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = LandingConfig::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ClinicError::Io(_)));
    }
}
