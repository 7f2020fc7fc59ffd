//! Browser-level signals surfaced as notifications.
//!
//! None of these are fatal: each one maps to a transient notification and
//! the page stays interactive.

use serde::{Deserialize, Serialize};

use crate::config::PageMessages;
use crate::notification::Severity;

/// A signal reported by the page host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageSignal {
    Online,
    Offline,
    /// Uncaught runtime error anywhere on the page
    ScriptError {
        #[serde(default)]
        message: String,
    },
    /// Escape or another key pressed anywhere on the page
    Key { key: String },
}

impl PageSignal {
    /// Notification to show for this signal, if any.
    pub fn notification(&self, messages: &PageMessages) -> Option<(String, Severity)> {
        match self {
            PageSignal::Online => Some((messages.online.clone(), Severity::Success)),
            PageSignal::Offline => Some((messages.offline.clone(), Severity::Error)),
            PageSignal::ScriptError { .. } => {
                Some((messages.runtime_error.clone(), Severity::Error))
            }
            PageSignal::Key { .. } => None,
        }
    }

    /// Log the signal at a level matching its severity.
    pub fn log(&self) {
        match self {
            PageSignal::Online => tracing::info!("Connection restored"),
            PageSignal::Offline => tracing::warn!("Connection lost"),
            PageSignal::ScriptError { message } => tracing::error!(%message, "Page error"),
            PageSignal::Key { key } => tracing::trace!(%key, "Key pressed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_host_messages() {
        let signal: PageSignal = serde_json::from_str(r#"{ "kind": "offline" }"#).unwrap();
        assert_eq!(signal, PageSignal::Offline);
        let signal: PageSignal =
            serde_json::from_str(r#"{ "kind": "script_error", "message": "x is undefined" }"#)
                .unwrap();
        assert_eq!(
            signal,
            PageSignal::ScriptError {
                message: "x is undefined".to_string()
            }
        );
        let signal: PageSignal =
            serde_json::from_str(r#"{ "kind": "key", "key": "Escape" }"#).unwrap();
        assert_eq!(signal, PageSignal::Key { key: "Escape".to_string() });
    }

    #[test]
    fn maps_to_notifications() {
        let messages = PageMessages::default();
        assert_eq!(
            PageSignal::Online.notification(&messages),
            Some(("Соединение восстановлено".to_string(), Severity::Success))
        );
        assert_eq!(
            PageSignal::Offline.notification(&messages).map(|(_, s)| s),
            Some(Severity::Error)
        );
        let (text, severity) = PageSignal::ScriptError {
            message: String::new(),
        }
        .notification(&messages)
        .unwrap();
        assert_eq!(text, "Произошла ошибка. Пожалуйста, обновите страницу.");
        assert_eq!(severity, Severity::Error);
        assert_eq!(
            PageSignal::Key { key: "a".to_string() }.notification(&messages),
            None
        );
    }
}
