//! Cosmetic page behaviour: phone mask, scroll progress, floating icons,
//! simulated doctor availability and the screen reader announcer.

mod announcer;
mod floating;
mod phone;
mod progress;
mod status;

pub use announcer::Announcer;
pub use floating::{float_delay, float_style, MAX_FLOAT_DELAY};
pub use phone::format_phone;
pub use progress::scroll_progress;
pub use status::{simulate_tick, StatusBadge};
