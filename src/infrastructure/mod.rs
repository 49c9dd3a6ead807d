//! Infrastructure layer providing external service integrations.
//!
//! This module contains the persistent key-value store backing the
//! application's flow flags.

pub mod persistence;

pub use persistence::*;
