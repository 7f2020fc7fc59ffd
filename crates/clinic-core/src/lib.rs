//! Clinic Landing Core Library
//!
//! Behaviour of the clinic landing page, independent of any renderer.
//!
//! ## Overview
//!
//! The page is a set of independent behaviours sharing one lifecycle:
//!
//! - **Navigation**: mobile menu, anchor scrolling, navbar style on scroll
//! - **Booking modal**: open/close with scroll lock and focus handling
//! - **Booking form**: field validation, specialty → practitioner select,
//!   submission through an async [`SubmissionClient`]
//! - **Notifications**: a single auto-dismissing toast slot
//! - **Animations**: card reveal and hero counters on viewport entry
//! - **Cosmetics**: phone mask, scroll progress, simulated doctor status,
//!   screen reader announcer
//!
//! Renderer-specific effects (scrolling, focus, timers) go through the
//! [`NavigationView`], [`ModalView`] and [`NotificationView`] traits.
//!
//! ## Quick Start
//!
//! ```ignore
//! use clinic_core::{BookingForm, FieldId, FieldValidator, LandingConfig};
//!
//! let config = LandingConfig::default();
//! let today = chrono::Local::now().date_naive();
//! let mut form = BookingForm::new(FieldValidator::new(&config.validation)?, today);
//!
//! form.on_input(FieldId::Name, "Иванов Петр");
//! form.on_input(FieldId::Phone, "84951234567");
//! form.select_specialty("cardiology");
//!
//! let request = form.begin_submit(today)?;
//! ```

pub mod animation;
pub mod catalog;
pub mod config;
pub mod cosmetic;
pub mod error;
pub mod form;
pub mod logging;
pub mod modal;
pub mod nav;
pub mod notification;
pub mod page;
pub mod submission;
pub mod timer;
pub mod validation;

// Re-exports
pub use animation::{CounterFrame, CounterSpec, CounterTrigger, RevealTracker};
pub use catalog::{DoctorProfile, PractitionerSelect, SelectOption, Specialty, DOCTORS, SPECIALTIES};
pub use config::LandingConfig;
pub use error::{ClinicError, ClinicResult};
pub use form::{BookingForm, FieldState, Preselect, SubmissionState, SubmitRejected};
pub use modal::{BookingModal, CloseReason, ModalView};
pub use nav::{NavigationController, NavigationView};
pub use notification::{
    LifecycleStep, Notification, NotificationCenter, NotificationId, NotificationView, Phase,
    Severity,
};
pub use page::PageSignal;
pub use submission::{AppointmentRequest, SimulatedClient, SubmissionClient};
pub use validation::{FieldId, FieldValidator, ValidationRules};
