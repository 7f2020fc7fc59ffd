//! Transient toast notifications.
//!
//! The page has a single notification slot. Showing a new notification tears
//! the previous one down immediately, including its pending timers, so at most
//! one notification exists at any time.
//!
//! ## Lifecycle
//!
//! ```text
//! show ──► Entering ──(enter delay)──► Shown ──(auto-hide / dismiss)──► Leaving ──(exit)──► removed
//! ```
//!
//! Timers are delegated to a [`NotificationView`], which calls back into
//! [`NotificationCenter::advance`] when a scheduled step is due. Every step is
//! tagged with the notification id, so a step that outlives its notification
//! is ignored.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::config::NotificationTimings;

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    /// CSS modifier class, e.g. `notification-error`.
    pub fn class(&self) -> &'static str {
        match self {
            Severity::Info => "notification-info",
            Severity::Success => "notification-success",
            Severity::Error => "notification-error",
        }
    }
}

/// Identifier of one notification instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notification-{}", self.0)
    }
}

/// Visual phase of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Inserted, entrance transition not started yet
    Entering,
    Shown,
    /// Exit transition running, removal pending
    Leaving,
}

/// The currently inserted notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub phase: Phase,
}

impl Notification {
    pub fn is_visible(&self) -> bool {
        self.phase == Phase::Shown
    }

    /// Full class list for the notification element.
    pub fn class(&self) -> String {
        let mut class = format!("notification {}", self.severity.class());
        if self.is_visible() {
            class.push_str(" show");
        }
        class
    }
}

/// Delayed step of the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleStep {
    /// Start the entrance transition
    Reveal,
    /// Automatic dismissal
    AutoHide,
    /// Remove the element after the exit transition
    Remove,
}

/// Timer side of the notification system.
pub trait NotificationView {
    /// Call [`NotificationCenter::advance`] with `id` and `step` after `delay`,
    /// unless `cancel` fires first.
    fn schedule(
        &mut self,
        id: NotificationId,
        step: LifecycleStep,
        delay: Duration,
        cancel: CancellationToken,
    );
}

struct Slot {
    notification: Notification,
    /// Cancelled when the notification is removed or replaced
    lifetime: CancellationToken,
    /// Child of `lifetime`, also cancelled on manual dismissal
    auto_hide: CancellationToken,
}

/// Owner of the single notification slot.
pub struct NotificationCenter {
    slot: Option<Slot>,
    next_id: u64,
    timings: NotificationTimings,
}

impl NotificationCenter {
    pub fn new(timings: NotificationTimings) -> Self {
        Self {
            slot: None,
            next_id: 0,
            timings,
        }
    }

    /// Show a notification, replacing any existing one immediately.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        view: &mut impl NotificationView,
    ) -> NotificationId {
        if let Some(previous) = self.slot.take() {
            previous.lifetime.cancel();
        }

        self.next_id += 1;
        let id = NotificationId(self.next_id);
        let lifetime = CancellationToken::new();
        let auto_hide = lifetime.child_token();
        let message = message.into();

        tracing::debug!(id = id.0, ?severity, %message, "Showing notification");

        view.schedule(id, LifecycleStep::Reveal, self.timings.enter(), lifetime.clone());
        view.schedule(
            id,
            LifecycleStep::AutoHide,
            self.timings.auto_hide(),
            auto_hide.clone(),
        );

        self.slot = Some(Slot {
            notification: Notification {
                id,
                message,
                severity,
                phase: Phase::Entering,
            },
            lifetime,
            auto_hide,
        });
        id
    }

    /// Manually dismiss the current notification.
    ///
    /// Cancels the pending auto-hide timer. Returns `false` when there is
    /// nothing to dismiss or the exit transition is already running.
    pub fn dismiss(&mut self, view: &mut impl NotificationView) -> bool {
        let Some(slot) = self.slot.as_mut() else {
            return false;
        };
        if slot.notification.phase == Phase::Leaving {
            return false;
        }
        slot.auto_hide.cancel();
        slot.notification.phase = Phase::Leaving;
        tracing::debug!(id = slot.notification.id.0, "Dismissing notification");
        view.schedule(
            slot.notification.id,
            LifecycleStep::Remove,
            self.timings.exit(),
            slot.lifetime.clone(),
        );
        true
    }

    /// Run a scheduled step. Steps for replaced notifications are ignored.
    pub fn advance(
        &mut self,
        id: NotificationId,
        step: LifecycleStep,
        view: &mut impl NotificationView,
    ) -> bool {
        let Some(slot) = self.slot.as_mut() else {
            return false;
        };
        if slot.notification.id != id {
            return false;
        }

        match step {
            LifecycleStep::Reveal => {
                if slot.notification.phase != Phase::Entering {
                    return false;
                }
                slot.notification.phase = Phase::Shown;
                true
            }
            LifecycleStep::AutoHide => self.dismiss(view),
            LifecycleStep::Remove => {
                if let Some(slot) = self.slot.take() {
                    slot.lifetime.cancel();
                }
                true
            }
        }
    }

    /// The notification currently in the slot, in any phase.
    pub fn current(&self) -> Option<&Notification> {
        self.slot.as_ref().map(|slot| &slot.notification)
    }

    /// Whether a notification is fully shown.
    pub fn is_visible(&self) -> bool {
        self.current().is_some_and(Notification::is_visible)
    }

    pub fn timings(&self) -> NotificationTimings {
        self.timings
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(NotificationTimings::default())
    }
}
