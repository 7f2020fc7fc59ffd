//! Page sections and page-wide behaviour.

mod accessibility;
mod booking_modal;
mod doctors;
mod hero;
mod nav_bar;
mod notification_host;
mod page_signals;
pub mod reveal;
pub mod services;

pub use accessibility::{LiveRegion, SkipLink};
pub use booking_modal::BookingModalView;
pub use doctors::Doctors;
pub use hero::Hero;
pub use nav_bar::NavBar;
pub use notification_host::NotificationHost;
pub use page_signals::PageSignals;
pub use services::Services;
