//! Device model: the simulated appliances managed by the hub
//!
//! A [`Device`] is the only persistent entity in OmniHub. The serde field
//! names match the persisted snapshot format (`type`, `powerState`), so
//! snapshots written by earlier builds keep loading.

use serde::{Deserialize, Serialize};

/// Icon used for kinds without a dedicated glyph (user-added transmitters)
pub const FALLBACK_ICON: &str = "📦";

/// Closed set of appliance categories
///
/// The category decides which remote layout a device gets and which default
/// icon is assigned at creation time. It never changes after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceKind {
    #[serde(rename = "TV")]
    Tv,
    #[serde(rename = "AC")]
    Ac,
    #[serde(rename = "DECODER")]
    Decoder,
    #[serde(rename = "FM_TRANSMITTER")]
    FmTransmitter,
    #[serde(rename = "LIGHT")]
    Light,
    #[serde(rename = "SOUNDBAR")]
    Soundbar,
}

impl DeviceKind {
    /// All kinds offered by the add-device form, in display order.
    ///
    /// `FmTransmitter` is deliberately absent: the broadcast panel is the
    /// canonical surface for that kind and new ones are not added by hand.
    pub const SELECTABLE: [DeviceKind; 5] = [
        DeviceKind::Tv,
        DeviceKind::Ac,
        DeviceKind::Decoder,
        DeviceKind::Light,
        DeviceKind::Soundbar,
    ];

    /// Uppercase wire label, as stored in snapshots
    pub fn label(&self) -> &'static str {
        match self {
            DeviceKind::Tv => "TV",
            DeviceKind::Ac => "AC",
            DeviceKind::Decoder => "DECODER",
            DeviceKind::FmTransmitter => "FM_TRANSMITTER",
            DeviceKind::Light => "LIGHT",
            DeviceKind::Soundbar => "SOUNDBAR",
        }
    }

    /// Human-facing label for menus
    pub fn display_name(&self) -> &'static str {
        match self {
            DeviceKind::Tv => "TV",
            DeviceKind::Ac => "AC",
            DeviceKind::Decoder => "Decoder",
            DeviceKind::FmTransmitter => "FM Link",
            DeviceKind::Light => "Lights",
            DeviceKind::Soundbar => "Audio",
        }
    }

    /// Fixed icon lookup used once at creation time.
    ///
    /// The chosen glyph is stored on the device verbatim and never
    /// recomputed, so seed devices keep their hand-picked icons.
    pub fn icon(&self) -> &'static str {
        match self {
            DeviceKind::Tv => "📺",
            DeviceKind::Ac => "❄️",
            DeviceKind::Decoder => "📡",
            DeviceKind::Light => "💡",
            DeviceKind::Soundbar => "🔊",
            DeviceKind::FmTransmitter => FALLBACK_ICON,
        }
    }
}

/// Cosmetic connectivity flag; never changed programmatically after creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceStatus {
    #[serde(rename = "online")]
    Online,
    #[serde(rename = "offline")]
    Offline,
}

/// Power flag, mutated exclusively by the power-toggle operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerState {
    #[serde(rename = "on")]
    On,
    #[serde(rename = "off")]
    Off,
}

impl PowerState {
    pub fn toggled(self) -> Self {
        match self {
            PowerState::On => PowerState::Off,
            PowerState::Off => PowerState::On,
        }
    }

    pub fn is_on(self) -> bool {
        self == PowerState::On
    }
}

/// A simulated controllable appliance record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Unique, stable, opaque identifier; assigned at creation, never reused
    pub id: String,
    /// Free-text user-facing label
    pub name: String,
    /// Free-text manufacturer label
    pub brand: String,
    /// Category; immutable after creation
    #[serde(rename = "type")]
    pub kind: DeviceKind,
    pub status: DeviceStatus,
    #[serde(rename = "powerState")]
    pub power: PowerState,
    /// Display glyph, derived from `kind` at creation and stored verbatim
    pub icon: String,
}

impl Device {
    /// Short summary used in the assistant context string
    pub fn summary(&self) -> String {
        format!("{} ({} {})", self.name, self.brand, self.kind.label())
    }
}

/// The fixed seed set used on first launch and as the corrupt-snapshot
/// fallback. Ids "1".."8" are reserved for these entries.
pub fn seed_devices() -> Vec<Device> {
    fn seed(
        id: &str,
        name: &str,
        brand: &str,
        kind: DeviceKind,
        status: DeviceStatus,
        power: PowerState,
        icon: &str,
    ) -> Device {
        Device {
            id: id.to_string(),
            name: name.to_string(),
            brand: brand.to_string(),
            kind,
            status,
            power,
            icon: icon.to_string(),
        }
    }

    use DeviceKind::*;
    use DeviceStatus::*;
    use PowerState::*;

    vec![
        seed("1", "Living Room TV", "Hisense", Tv, Online, On, "📺"),
        seed("2", "Master AC", "Samsung", Ac, Online, On, "❄️"),
        seed("3", "Entertainment Hub", "DStv", Decoder, Online, On, "📡"),
        seed("4", "Bedroom AC", "Hisense", Ac, Online, On, "💨"),
        seed("5", "Car Link", "OmniLink", FmTransmitter, Online, On, "📻"),
        seed("6", "Cinema Bar", "Samsung", Soundbar, Online, On, "🔊"),
        seed("7", "Mood Lights", "Philips Hue", Light, Online, On, "💡"),
        seed("8", "Kitchen AC", "LG", Ac, Offline, Off, "🌡️"),
    ]
}

/// Serialize the device collection into the assistant context string:
/// `"name (brand KIND)"` entries joined with `", "`.
pub fn device_context(devices: &[Device]) -> String {
    devices
        .iter()
        .map(Device::summary)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_to_wire_labels() {
        let json = serde_json::to_string(&DeviceKind::FmTransmitter).unwrap();
        assert_eq!(json, "\"FM_TRANSMITTER\"");
        let kind: DeviceKind = serde_json::from_str("\"SOUNDBAR\"").unwrap();
        assert_eq!(kind, DeviceKind::Soundbar);
    }

    #[test]
    fn test_icon_lookup_table() {
        assert_eq!(DeviceKind::Tv.icon(), "📺");
        assert_eq!(DeviceKind::Ac.icon(), "❄️");
        assert_eq!(DeviceKind::Decoder.icon(), "📡");
        assert_eq!(DeviceKind::Light.icon(), "💡");
        assert_eq!(DeviceKind::Soundbar.icon(), "🔊");
        assert_eq!(DeviceKind::FmTransmitter.icon(), FALLBACK_ICON);
    }

    #[test]
    fn test_seed_set_shape() {
        let seeds = seed_devices();
        assert_eq!(seeds.len(), 8);

        // Ids unique and stable
        let mut ids: Vec<_> = seeds.iter().map(|d| d.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);

        // Device "1" starts powered on, device "8" is the offline seed
        assert_eq!(seeds[0].id, "1");
        assert_eq!(seeds[0].power, PowerState::On);
        assert_eq!(seeds[7].status, DeviceStatus::Offline);
    }

    #[test]
    fn test_device_snapshot_field_names() {
        let device = &seed_devices()[0];
        let json = serde_json::to_value(device).unwrap();
        assert_eq!(json["type"], "TV");
        assert_eq!(json["powerState"], "on");
        assert_eq!(json["status"], "online");
    }

    #[test]
    fn test_device_context_format() {
        let seeds = seed_devices();
        let context = device_context(&seeds[..2]);
        assert_eq!(
            context,
            "Living Room TV (Hisense TV), Master AC (Samsung AC)"
        );
    }

    #[test]
    fn test_power_toggled() {
        assert_eq!(PowerState::On.toggled(), PowerState::Off);
        assert_eq!(PowerState::Off.toggled(), PowerState::On);
        assert_eq!(PowerState::On.toggled().toggled(), PowerState::On);
    }
}
