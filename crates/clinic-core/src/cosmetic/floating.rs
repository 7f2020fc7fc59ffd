//! Floating decoration icons.

use std::time::Duration;

use rand::Rng;

/// Longest random animation offset for a floating element.
pub const MAX_FLOAT_DELAY: Duration = Duration::from_secs(2);

/// Random animation delay in `[0, 2s)` so floating icons drift out of phase.
pub fn float_delay<R: Rng>(rng: &mut R) -> Duration {
    MAX_FLOAT_DELAY.mul_f64(rng.random::<f64>())
}

/// Inline style for a floating element.
pub fn float_style(delay: Duration, paused: bool) -> String {
    format!(
        "animation-delay: {:.2}s; animation-play-state: {};",
        delay.as_secs_f64(),
        if paused { "paused" } else { "running" }
    )
}
