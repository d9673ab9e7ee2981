//! Centralized theme for the OmniControl glass look.
//!
//! - `palette` holds raw color constants
//! - `styles` holds semantic style builders

pub mod palette;
pub mod styles;
