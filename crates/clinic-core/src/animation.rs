//! Scroll-triggered reveal and counter animations.
//!
//! Both are driven by viewport intersection callbacks from the page. Counter
//! frames are computed from elapsed wall time, so a slow frame rate only makes
//! the animation coarser, never longer.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Tracks which observed cards have been revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealTracker {
    revealed: Vec<bool>,
    stagger: Duration,
}

impl RevealTracker {
    pub fn new(count: usize, stagger: Duration) -> Self {
        Self {
            revealed: vec![false; count],
            stagger,
        }
    }

    /// Handle an intersection for the element at `index`.
    ///
    /// Returns `true` only the first time; later intersections are no-ops.
    /// Out-of-range indices are ignored.
    pub fn on_intersect(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(seen) if !*seen => {
                *seen = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Transition delay for the element at `index`.
    pub fn delay_for(&self, index: usize) -> Duration {
        self.stagger * index as u32
    }

    /// CSS classes for the element at `index`.
    pub fn class_for(&self, index: usize) -> &'static str {
        if self.is_revealed(index) {
            "fade-in visible"
        } else {
            "fade-in"
        }
    }
}

/// One statistic in the hero section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CounterSpec {
    /// Counts up from zero to `target`
    Animated {
        label: String,
        target: u64,
        duration_ms: u64,
        #[serde(default)]
        suffix: String,
        /// Use locale thousands separators
        #[serde(default)]
        grouped: bool,
    },
    /// Shown as-is
    Static { label: String, text: String },
}

impl CounterSpec {
    pub fn label(&self) -> &str {
        match self {
            CounterSpec::Animated { label, .. } | CounterSpec::Static { label, .. } => label,
        }
    }

    /// Text at `elapsed` time since the animation started.
    pub fn frame(&self, elapsed: Duration) -> CounterFrame {
        match self {
            CounterSpec::Static { text, .. } => CounterFrame {
                text: text.clone(),
                done: true,
            },
            CounterSpec::Animated {
                target,
                duration_ms,
                suffix,
                grouped,
                ..
            } => {
                let progress = progress(elapsed, Duration::from_millis(*duration_ms));
                let current = (progress * *target as f64).floor() as u64;
                let number = if *grouped {
                    group_thousands(current, THOUSANDS_SEPARATOR)
                } else {
                    current.to_string()
                };
                CounterFrame {
                    text: format!("{number}{suffix}"),
                    done: progress >= 1.0,
                }
            }
        }
    }

    /// Text once the animation has finished.
    pub fn final_text(&self) -> String {
        self.frame(Duration::MAX).text
    }
}

/// A rendered counter frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

/// Russian locale groups digits with a no-break space.
pub const THOUSANDS_SEPARATOR: char = '\u{a0}';

/// Fraction of `duration` covered by `elapsed`, clamped to `[0, 1]`.
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
}

/// Format `value` with `separator` between groups of three digits.
pub fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 2);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// Starts the hero counters exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterTrigger {
    fired: bool,
}

impl CounterTrigger {
    /// Returns `true` on the first call only.
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patients() -> CounterSpec {
        CounterSpec::Animated {
            label: "Довольных пациентов".to_string(),
            target: 15_000,
            duration_ms: 2000,
            suffix: "+".to_string(),
            grouped: true,
        }
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut tracker = RevealTracker::new(3, Duration::from_millis(100));
        assert!(tracker.on_intersect(1));
        assert!(!tracker.on_intersect(1));
        assert!(tracker.is_revealed(1));
        assert!(!tracker.is_revealed(0));
        assert!(!tracker.on_intersect(9));
        assert_eq!(tracker.class_for(1), "fade-in visible");
        assert_eq!(tracker.class_for(2), "fade-in");
    }

    #[test]
    fn stagger_grows_with_index() {
        let tracker = RevealTracker::new(4, Duration::from_millis(100));
        assert_eq!(tracker.delay_for(0), Duration::ZERO);
        assert_eq!(tracker.delay_for(3), Duration::from_millis(300));
    }

    #[test]
    fn grouping() {
        assert_eq!(group_thousands(0, ' '), "0");
        assert_eq!(group_thousands(999, ' '), "999");
        assert_eq!(group_thousands(1000, ' '), "1 000");
        assert_eq!(group_thousands(15_000, ' '), "15 000");
        assert_eq!(group_thousands(1_234_567, ' '), "1 234 567");
    }

    #[test]
    fn counter_interpolates_by_elapsed_time() {
        let spec = patients();
        assert_eq!(spec.frame(Duration::ZERO).text, "0+");
        let half = spec.frame(Duration::from_millis(1000));
        assert_eq!(half.text, "7\u{a0}500+");
        assert!(!half.done);
        let end = spec.frame(Duration::from_millis(2000));
        assert_eq!(end.text, "15\u{a0}000+");
        assert!(end.done);
        assert_eq!(spec.frame(Duration::from_secs(60)).text, "15\u{a0}000+");
    }

    #[test]
    fn plain_counter_floors() {
        let spec = CounterSpec::Animated {
            label: "Лет опыта".to_string(),
            target: 12,
            duration_ms: 1500,
            suffix: String::new(),
            grouped: false,
        };
        assert_eq!(spec.frame(Duration::from_millis(100)).text, "0");
        assert_eq!(spec.frame(Duration::from_millis(750)).text, "6");
        assert_eq!(spec.final_text(), "12");
    }

    #[test]
    fn static_counter_is_done_immediately() {
        let spec = CounterSpec::Static {
            label: "Экстренная помощь".to_string(),
            text: "24/7".to_string(),
        };
        let frame = spec.frame(Duration::ZERO);
        assert_eq!(frame.text, "24/7");
        assert!(frame.done);
    }

    #[test]
    fn trigger_fires_once() {
        let mut trigger = CounterTrigger::default();
        assert!(trigger.fire());
        assert!(!trigger.fire());
        assert!(trigger.has_fired());
    }

    #[test]
    fn counter_spec_from_json() {
        let spec: CounterSpec = serde_json::from_str(
            r#"{ "kind": "static", "label": "Экстренная помощь", "text": "24/7" }"#,
        )
        .unwrap();
        assert_eq!(spec.label(), "Экстренная помощь");
    }
}
