//! Presentation layer handling terminal UI and user input.
//!
//! This module renders the active screen with ratatui and maps keyboard
//! input onto screen intents.

pub mod ui;
pub mod input;

pub use ui::*;
pub use input::*;
