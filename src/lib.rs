//! appflow - Application-Flow Controller
//!
//! A terminal demo that routes between onboarding, paywall, and main app
//! screens based on three persisted flow flags.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
