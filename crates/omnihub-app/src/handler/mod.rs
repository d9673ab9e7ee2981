//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per tab and input mode
//! - `devices`: Dashboard operations (activate, power toggle, add device)
//! - `remote`: Remote button dispatch
//! - `fm`: Broadcast panel handlers
//! - `assistant`: Assistant panel handlers

pub(crate) mod assistant;
pub(crate) mod devices;
pub(crate) mod fm;
pub(crate) mod keys;
pub(crate) mod remote;
pub(crate) mod update;


use std::time::Duration;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// How long the dashboard power-burst highlight stays lit
pub const BURST_CLEAR: Duration = Duration::from_millis(800);

/// Background work the event loop performs after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Spawn a background task
    SpawnTask(Task),
}

/// A unit of background work. Timers echo back the token they were armed
/// with so the update function can drop completions that are stale.
#[derive(Debug, Clone)]
pub enum Task {
    /// Clear the power-burst highlight after [`BURST_CLEAR`]
    ClearBurst { generation: u64 },

    /// Clear the transmit indicator after
    /// [`crate::dispatch::TRANSMIT_CLEAR`]
    ClearTransmit { seq: u64 },

    /// Land the scanned frequency after [`crate::fm::SCAN_DELAY`]
    CompleteScan { token: u64, tenths: u16 },

    /// Mark the source paired after [`crate::fm::PAIRING_DELAY`]
    CompletePairing { token: u64 },

    /// Run the assistant completion for request `seq`
    AskAssistant {
        seq: u64,
        prompt: String,
        context: String,
    },
}

/// Result of the update function: an optional follow-up message and/or an
/// action for the event loop to perform
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    pub fn task(task: Task) -> Self {
        Self::action(UpdateAction::SpawnTask(task))
    }
}
