//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::state::Tab;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (poll timeout)
    Tick,

    /// Quit the application
    Quit,

    /// Switch the active top-level tab
    SelectTab(Tab),

    // ─────────────────────────────────────────────────────────
    // Dashboard Messages
    // ─────────────────────────────────────────────────────────
    /// Open a device: FM transmitters route to the FM tab, everything
    /// else selects the device and opens its remote
    ActivateDevice { device_id: String },

    /// Flip a device's power flag (dedicated power button)
    TogglePower { device_id: String },

    /// Power-burst highlight expired; `generation` guards staleness
    BurstCleared { generation: u64 },

    /// Add-device form submitted
    SubmitAddDevice,

    // ─────────────────────────────────────────────────────────
    // Remote Messages
    // ─────────────────────────────────────────────────────────
    /// A remote button press, identified by its command label
    RemoteButton { command: &'static str },

    /// Transmit indicator timer fired for sequence `seq`
    TransmitCleared { seq: u64 },

    // ─────────────────────────────────────────────────────────
    // Broadcast Panel Messages
    // ─────────────────────────────────────────────────────────
    /// Frequency step: +1 or -1 tenth of a MHz
    FmStep { up: bool },
    FmScan,
    FmScanCompleted { token: u64, tenths: u16 },
    FmTogglePairing,
    FmPairingCompleted { token: u64 },
    FmTogglePlayback,
    FmToggleTransmit,

    // ─────────────────────────────────────────────────────────
    // Assistant Messages
    // ─────────────────────────────────────────────────────────
    /// Submit the assistant input buffer
    AssistantSubmit,

    /// Assistant reply (or the fallback string on failure) for request
    /// `seq`
    AssistantCompleted { seq: u64, reply: String },
}
