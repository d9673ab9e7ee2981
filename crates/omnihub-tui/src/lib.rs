//! omnihub-tui - Terminal UI for OmniHub
//!
//! This crate renders the application model from omnihub-app with ratatui
//! and drives it: terminal event polling, the main loop, and the action
//! dispatcher that runs timers and the assistant call in the background.

pub mod actions;
pub mod event;
pub mod layout;
pub mod process;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
