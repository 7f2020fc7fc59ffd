//! Reusable UI components for the landing page.

mod button;
mod field;
mod icon;
mod scroll_progress;
mod status_badge;
mod toast;

pub use button::*;
pub use field::*;
pub use icon::*;
pub use scroll_progress::*;
pub use status_badge::*;
pub use toast::*;
