//! omnihub-app - Application state and orchestration for OmniHub
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the model ([`AppState`]), the messages ([`Message`]), and the
//! update function ([`handler::update`]). Background work (timers, the
//! assistant call) is described by [`UpdateAction`]/[`Task`] values returned
//! from `update` and executed by the TUI crate's action dispatcher.

pub mod assist_panel;
pub mod config;
pub mod dispatch;
pub mod fm;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod remote;
pub mod state;
pub mod store;

// Re-export primary types
pub use assist_panel::AssistantPanel;
pub use dispatch::{TransmitLog, TransmitRecord, TRANSMIT_CLEAR, TRANSMIT_LOG_CAP};
pub use fm::{BroadcastState, PairingAction, PAIRING_DELAY, SCAN_DELAY};
pub use handler::{Task, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use remote::RemoteState;
pub use state::{AppState, InputMode, Tab};
pub use store::{DeviceStore, JsonSnapshotStore, NullSnapshotStore, SnapshotStore};
