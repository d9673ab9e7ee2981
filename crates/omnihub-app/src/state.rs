//! Application state (Model in TEA pattern)

use omnihub_core::{device_context, Device, DeviceKind};

use crate::assist_panel::AssistantPanel;
use crate::dispatch::TransmitLog;
use crate::fm::BroadcastState;
use crate::remote::RemoteState;
use crate::store::DeviceStore;

/// Top-level screens; all four are reachable from all four
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Remotes,
    Fm,
    Assistant,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Dashboard, Tab::Remotes, Tab::Fm, Tab::Assistant];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Remotes => "Master Remote",
            Tab::Fm => "FM Link",
            Tab::Assistant => "AI Hub",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Dashboard input mode: which surface the keyboard is feeding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the dashboard search filter
    Search,
    /// The add-device form is open
    AddDevice,
}

/// Field focus within the add-device form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddField {
    #[default]
    Name,
    Brand,
    Kind,
}

impl AddField {
    pub fn next(&self) -> AddField {
        match self {
            AddField::Name => AddField::Brand,
            AddField::Brand => AddField::Kind,
            AddField::Kind => AddField::Name,
        }
    }

    pub fn prev(&self) -> AddField {
        match self {
            AddField::Name => AddField::Kind,
            AddField::Brand => AddField::Name,
            AddField::Kind => AddField::Brand,
        }
    }
}

/// Add-device form state; kind defaults to TV
#[derive(Debug, Clone, Default)]
pub struct AddDeviceForm {
    pub name: String,
    pub brand: String,
    pub kind_index: usize,
    pub focus: AddField,
}

impl AddDeviceForm {
    pub fn kind(&self) -> DeviceKind {
        DeviceKind::SELECTABLE[self.kind_index % DeviceKind::SELECTABLE.len()]
    }

    pub fn cycle_kind(&mut self, forward: bool) {
        let len = DeviceKind::SELECTABLE.len();
        self.kind_index = if forward {
            (self.kind_index + 1) % len
        } else {
            (self.kind_index + len - 1) % len
        };
    }
}

/// Transient power-burst marker driving the dashboard visual flash
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerBurst {
    pub device_id: String,
    pub generation: u64,
}

/// The application model. The top-level shell owns it; all mutation goes
/// through the update function.
pub struct AppState {
    pub devices: DeviceStore,
    pub tab: Tab,
    /// Device whose remote is shown on the Remotes tab
    pub selected_device_id: Option<String>,
    /// Dashboard highlight within the filtered device list
    pub cursor: usize,
    pub search: String,
    pub mode: InputMode,
    pub add_form: AddDeviceForm,
    pub burst: Option<PowerBurst>,
    burst_generation: u64,
    /// Ephemeral layout state for the selected device; reset per selection
    pub remote: Option<RemoteState>,
    pub transmit: TransmitLog,
    pub fm: BroadcastState,
    pub assistant: AssistantPanel,
    should_quit: bool,
}

impl AppState {
    pub fn new(devices: DeviceStore) -> Self {
        Self {
            devices,
            tab: Tab::Dashboard,
            selected_device_id: None,
            cursor: 0,
            search: String::new(),
            mode: InputMode::Normal,
            add_form: AddDeviceForm::default(),
            burst: None,
            burst_generation: 0,
            remote: None,
            transmit: TransmitLog::new(),
            fm: BroadcastState::new(),
            assistant: AssistantPanel::new(),
            should_quit: false,
        }
    }

    /// Seeded in-memory state (tests, demo mode)
    pub fn seeded() -> Self {
        Self::new(DeviceStore::seeded())
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Devices matching the dashboard search filter (name, brand or kind
    /// label, case-insensitive), in store order.
    pub fn filtered_devices(&self) -> Vec<&Device> {
        let needle = self.search.to_lowercase();
        self.devices
            .devices()
            .iter()
            .filter(|d| {
                needle.is_empty()
                    || d.name.to_lowercase().contains(&needle)
                    || d.brand.to_lowercase().contains(&needle)
                    || d.kind.label().to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Device under the dashboard cursor
    pub fn highlighted_device_id(&self) -> Option<String> {
        self.filtered_devices()
            .get(self.cursor)
            .map(|d| d.id.clone())
    }

    /// Device whose remote is shown, resolved fresh from the store
    pub fn selected_device(&self) -> Option<&Device> {
        self.selected_device_id
            .as_deref()
            .and_then(|id| self.devices.find(id))
    }

    /// Routing rule for opening a device.
    ///
    /// FM transmitter devices redirect to the broadcast panel (the
    /// canonical "remote" for that kind) without touching the selection;
    /// everything else selects the device, mounts a fresh layout and
    /// switches to the Remotes tab. Unknown ids do nothing.
    pub fn activate_device(&mut self, id: &str) {
        let Some(device) = self.devices.find(id) else {
            return;
        };
        if device.kind == DeviceKind::FmTransmitter {
            self.tab = Tab::Fm;
            return;
        }
        let kind = device.kind;
        self.selected_device_id = Some(id.to_string());
        self.remote = RemoteState::for_kind(kind);
        self.tab = Tab::Remotes;
    }

    /// Arm the power-burst marker for a device; returns the generation the
    /// clear timer must echo back.
    pub fn start_burst(&mut self, device_id: &str) -> u64 {
        self.burst_generation += 1;
        self.burst = Some(PowerBurst {
            device_id: device_id.to_string(),
            generation: self.burst_generation,
        });
        self.burst_generation
    }

    /// Clear the burst marker if `generation` is still the live one.
    pub fn clear_burst(&mut self, generation: u64) {
        if self
            .burst
            .as_ref()
            .is_some_and(|b| b.generation == generation)
        {
            self.burst = None;
        }
    }

    /// Clamp the dashboard cursor after the filtered list changed.
    pub fn clamp_cursor(&mut self) {
        let len = self.filtered_devices().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Context summary handed to the assistant
    pub fn device_context(&self) -> String {
        device_context(self.devices.devices())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle_round_trips() {
        let mut tab = Tab::Dashboard;
        for _ in 0..Tab::ALL.len() {
            tab = tab.next();
        }
        assert_eq!(tab, Tab::Dashboard);
        assert_eq!(Tab::Dashboard.prev(), Tab::Assistant);
    }

    #[test]
    fn test_activate_fm_transmitter_routes_to_fm_without_selecting() {
        let mut state = AppState::seeded();
        // Seed "5" is the Car Link FM transmitter
        state.activate_device("5");
        assert_eq!(state.tab, Tab::Fm);
        assert!(state.selected_device_id.is_none());
        assert!(state.remote.is_none());
    }

    #[test]
    fn test_activate_other_kind_selects_and_routes_to_remotes() {
        let mut state = AppState::seeded();
        state.activate_device("1");
        assert_eq!(state.tab, Tab::Remotes);
        assert_eq!(state.selected_device_id.as_deref(), Some("1"));
        assert!(matches!(state.remote, Some(RemoteState::Tv { .. })));
    }

    #[test]
    fn test_activate_unknown_id_is_noop() {
        let mut state = AppState::seeded();
        state.activate_device("nope");
        assert_eq!(state.tab, Tab::Dashboard);
        assert!(state.selected_device_id.is_none());
    }

    #[test]
    fn test_selection_change_resets_remote_state() {
        let mut state = AppState::seeded();
        state.activate_device("1");
        if let Some(RemoteState::Tv { channel, .. }) = &mut state.remote {
            *channel = 99;
        }
        // Selecting another device mounts a fresh layout
        state.activate_device("2");
        assert_eq!(state.remote, RemoteState::for_kind(DeviceKind::Ac));

        // Re-selecting the first device resets its layout too
        state.activate_device("1");
        assert!(matches!(
            state.remote,
            Some(RemoteState::Tv { channel: 12, .. })
        ));
    }

    #[test]
    fn test_search_filters_by_name_brand_and_kind() {
        let mut state = AppState::seeded();
        state.search = "hisense".to_string();
        let hits = state.filtered_devices();
        assert_eq!(hits.len(), 2);

        state.search = "AC".to_string();
        assert_eq!(state.filtered_devices().len(), 3);

        state.search = "nothing-matches".to_string();
        assert!(state.filtered_devices().is_empty());
    }

    #[test]
    fn test_burst_clear_ignores_stale_generation() {
        let mut state = AppState::seeded();
        let first = state.start_burst("1");
        let second = state.start_burst("2");

        state.clear_burst(first);
        assert!(state.burst.is_some());

        state.clear_burst(second);
        assert!(state.burst.is_none());
    }
}
