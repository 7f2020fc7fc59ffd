//! Clinic Landing UI Components
//!
//! This crate provides the Dioxus building blocks of the clinic landing
//! page: buttons, form fields with inline errors, the toast notification,
//! doctor status badges and the scroll progress bar.
//!
//! ## Design Notes
//!
//! - **Cyan (#0891b2)**: primary actions, links, focus rings
//! - **Emerald (#10b981)**: success notifications, "online" badges
//! - **Red (#ef4444)**: errors, the emergency call button
//!
//! Components render state from `clinic-core` types and report events
//! through handlers; they hold no workflow logic of their own.

pub mod components;

pub use components::*;
