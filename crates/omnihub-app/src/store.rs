//! Device-state store: the single source of truth for the Device collection
//!
//! The store is the only writer of `powerState`. Every successful mutation
//! is handed to the [`SnapshotStore`] collaborator; persistence failures are
//! logged and swallowed so the UI keeps working from memory.

use std::path::{Path, PathBuf};

use omnihub_core::prelude::*;
use omnihub_core::{seed_devices, Device, DeviceKind, DeviceStatus, PowerState};

/// Persistence collaborator holding the serialized device snapshot.
///
/// A snapshot is the full device sequence; it is read once at startup and
/// written after every mutation.
pub trait SnapshotStore: Send {
    /// Read the previously saved snapshot. `Ok(None)` means no snapshot
    /// exists yet; an `Err` means one exists but could not be parsed.
    fn load(&self) -> Result<Option<Vec<Device>>>;

    /// Write the full device sequence.
    fn save(&self, devices: &[Device]) -> Result<()>;
}

/// Snapshot store writing pretty JSON to a single file.
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default snapshot location: `<data_dir>/omnihub/devices.json`
    pub fn default_path() -> PathBuf {
        let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("omnihub").join("devices.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn load(&self) -> Result<Option<Vec<Device>>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let devices = serde_json::from_str(&raw)?;
        Ok(Some(devices))
    }

    fn save(&self, devices: &[Device]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(devices)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// Snapshot store that keeps nothing. Used when persistence is disabled
/// and in tests that only care about in-memory behavior.
pub struct NullSnapshotStore;

impl SnapshotStore for NullSnapshotStore {
    fn load(&self) -> Result<Option<Vec<Device>>> {
        Ok(None)
    }

    fn save(&self, _devices: &[Device]) -> Result<()> {
        Ok(())
    }
}

/// The live device collection.
///
/// Index 0 is the most recently added device; the seed order is preserved
/// when loading from seeds or a snapshot.
pub struct DeviceStore {
    devices: Vec<Device>,
    snapshot: Box<dyn SnapshotStore>,
}

impl DeviceStore {
    /// Load the saved snapshot, falling back to the fixed seed set when the
    /// snapshot is absent or unparseable.
    pub fn load_or_seed(snapshot: Box<dyn SnapshotStore>) -> Self {
        let devices = match snapshot.load() {
            Ok(Some(devices)) => {
                info!("Loaded {} devices from snapshot", devices.len());
                devices
            }
            Ok(None) => seed_devices(),
            Err(e) => {
                warn!("Device snapshot unreadable, using seed set: {e}");
                seed_devices()
            }
        };
        Self { devices, snapshot }
    }

    /// In-memory store seeded with the default devices (no persistence).
    pub fn seeded() -> Self {
        Self {
            devices: seed_devices(),
            snapshot: Box::new(NullSnapshotStore),
        }
    }

    /// Current devices, most recently added first.
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Lookup by identifier; a miss means "nothing selected", not an error.
    pub fn find(&self, id: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }

    /// Add a device with a freshly assigned unique id.
    ///
    /// Silent no-op (returns `None`) when `name` or `brand` is blank; this
    /// is validation policy, not a failure.
    pub fn add(&mut self, name: &str, brand: &str, kind: DeviceKind) -> Option<&Device> {
        let name = name.trim();
        let brand = brand.trim();
        if name.is_empty() || brand.is_empty() {
            return None;
        }

        let device = Device {
            id: self.next_id(),
            name: name.to_string(),
            brand: brand.to_string(),
            kind,
            status: DeviceStatus::Online,
            power: PowerState::On,
            icon: kind.icon().to_string(),
        };
        info!(id = %device.id, name = %device.name, "Device added");
        self.devices.insert(0, device);
        self.persist();
        Some(&self.devices[0])
    }

    /// Flip the power state of the matching device. Returns whether a
    /// device matched; unknown ids are a no-op.
    pub fn toggle_power(&mut self, id: &str) -> bool {
        let Some(device) = self.devices.iter_mut().find(|d| d.id == id) else {
            return false;
        };
        device.power = device.power.toggled();
        debug!(id, power = ?device.power, "Power toggled");
        self.persist();
        true
    }

    /// Id assigned from the creation timestamp, bumped until unique.
    fn next_id(&self) -> String {
        let mut millis = chrono::Utc::now().timestamp_millis();
        loop {
            let candidate = millis.to_string();
            if self.find(&candidate).is_none() {
                return candidate;
            }
            millis += 1;
        }
    }

    fn persist(&self) {
        if let Err(e) = self.snapshot.save(&self.devices) {
            warn!("Failed to persist device snapshot: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> DeviceStore {
        DeviceStore::seeded()
    }

    #[test]
    fn test_seeded_store_has_eight_devices() {
        assert_eq!(store().len(), 8);
    }

    #[test]
    fn test_add_grows_by_one_with_unique_ids() {
        let mut store = store();
        for i in 0..5 {
            let before = store.len();
            store
                .add(&format!("Device {i}"), "Acme", DeviceKind::Tv)
                .unwrap();
            assert_eq!(store.len(), before + 1);
        }
        let mut ids: Vec<_> = store.devices().iter().map(|d| d.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), store.len());
    }

    #[test]
    fn test_add_blank_name_or_brand_is_noop() {
        let mut store = store();
        assert!(store.add("", "Acme", DeviceKind::Tv).is_none());
        assert!(store.add("   ", "Acme", DeviceKind::Tv).is_none());
        assert!(store.add("Lamp", "", DeviceKind::Light).is_none());
        assert_eq!(store.len(), 8);
    }

    #[test]
    fn test_add_inserts_at_front_with_defaults() {
        let mut store = store();
        store.add("Office Fan", "Hisense", DeviceKind::Ac).unwrap();
        assert_eq!(store.len(), 9);

        let first = &store.devices()[0];
        assert_eq!(first.name, "Office Fan");
        assert_eq!(first.power, PowerState::On);
        assert_eq!(first.status, DeviceStatus::Online);
        assert_eq!(first.icon, DeviceKind::Ac.icon());
    }

    #[test]
    fn test_toggle_power_is_idempotent_under_double_application() {
        let mut store = store();
        let before = store.find("1").unwrap().power;

        assert!(store.toggle_power("1"));
        assert_eq!(store.find("1").unwrap().power, before.toggled());

        assert!(store.toggle_power("1"));
        assert_eq!(store.find("1").unwrap().power, before);
    }

    #[test]
    fn test_toggle_power_unknown_id_is_noop() {
        let mut store = store();
        let snapshot: Vec<_> = store.devices().to_vec();
        assert!(!store.toggle_power("no-such-device"));
        assert_eq!(store.devices(), snapshot.as_slice());
    }

    #[test]
    fn test_find_miss_is_none() {
        assert!(store().find("999").is_none());
    }

    #[test]
    fn test_json_snapshot_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("devices.json");

        {
            let mut store =
                DeviceStore::load_or_seed(Box::new(JsonSnapshotStore::new(&path)));
            store.add("Office Fan", "Hisense", DeviceKind::Ac).unwrap();
        }

        let reloaded = DeviceStore::load_or_seed(Box::new(JsonSnapshotStore::new(&path)));
        assert_eq!(reloaded.len(), 9);
        assert_eq!(reloaded.devices()[0].name, "Office Fan");
    }

    #[test]
    fn test_corrupt_snapshot_falls_back_to_seeds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("devices.json");
        std::fs::write(&path, "{ not valid json").unwrap();

        let store = DeviceStore::load_or_seed(Box::new(JsonSnapshotStore::new(&path)));
        assert_eq!(store.len(), 8);
        assert_eq!(store.devices()[0].id, "1");
    }

    #[test]
    fn test_missing_snapshot_loads_seeds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("devices.json");
        let store = DeviceStore::load_or_seed(Box::new(JsonSnapshotStore::new(path)));
        assert_eq!(store.len(), 8);
    }
}
