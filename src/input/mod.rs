//! Input adapters.
//!
//! Front ends that turn platform events into session input events.

#[cfg(feature = "gui")]
pub mod gui;
