//! Simulated availability of doctors.
//!
//! Every tick each badge independently has a small chance to re-roll its
//! state. Nothing is fetched; this only makes the team section feel alive.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::StatusConfig;

/// Availability shown on a doctor card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBadge {
    #[default]
    Online,
    Busy,
}

impl StatusBadge {
    /// CSS class combined with `doctor-status`.
    pub fn class(&self) -> &'static str {
        match self {
            StatusBadge::Online => "online",
            StatusBadge::Busy => "busy",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusBadge::Online => "Принимает",
            StatusBadge::Busy => "Занят",
        }
    }
}

/// Run one simulation tick. Returns how many badges changed state.
pub fn simulate_tick<R: Rng>(
    badges: &mut [StatusBadge],
    config: &StatusConfig,
    rng: &mut R,
) -> usize {
    let mut changed = 0;
    for badge in badges.iter_mut() {
        if rng.random::<f64>() < config.flip_probability {
            let next = if rng.random::<f64>() < config.online_probability {
                StatusBadge::Online
            } else {
                StatusBadge::Busy
            };
            if next != *badge {
                changed += 1;
            }
            *badge = next;
        }
    }
    changed
}
