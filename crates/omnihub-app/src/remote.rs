//! Per-kind remote layout state
//!
//! Each layout owns purely local display parameters (channel, setpoint,
//! brightness, volume). They are created fresh whenever a device is
//! selected, never stored on the device, and never persisted: an
//! arena-per-selection, thrown away on the next selection.

use omnihub_core::DeviceKind;

/// Light color presets cycled by the color button
pub const LIGHT_COLORS: [&str; 4] = ["Red", "Blue", "Green", "Amber"];

/// Ephemeral state for the active remote layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteState {
    Tv { channel: u16, volume: u8 },
    Ac { setpoint: i8 },
    Decoder,
    Light { brightness: u8, color: usize },
    Soundbar { volume: u8 },
}

impl RemoteState {
    /// Fresh layout state for a newly selected device.
    ///
    /// `FmTransmitter` never reaches this selector; the router redirects
    /// those devices to the broadcast panel upstream.
    pub fn for_kind(kind: DeviceKind) -> Option<Self> {
        match kind {
            DeviceKind::Tv => Some(RemoteState::Tv {
                channel: 12,
                volume: 45,
            }),
            DeviceKind::Ac => Some(RemoteState::Ac { setpoint: 22 }),
            DeviceKind::Decoder => Some(RemoteState::Decoder),
            DeviceKind::Light => Some(RemoteState::Light {
                brightness: 80,
                color: 0,
            }),
            DeviceKind::Soundbar => Some(RemoteState::Soundbar { volume: 45 }),
            DeviceKind::FmTransmitter => None,
        }
    }
}
