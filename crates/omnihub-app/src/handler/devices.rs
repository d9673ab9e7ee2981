//! Dashboard operations: power toggle and the add-device form

use crate::state::{AddDeviceForm, AppState, InputMode};

use super::{Task, UpdateResult};

/// Flip a device's power flag and arm the burst highlight.
///
/// Unknown ids are a no-op: no burst, no timer.
pub(crate) fn handle_toggle_power(state: &mut AppState, device_id: &str) -> UpdateResult {
    if !state.devices.toggle_power(device_id) {
        return UpdateResult::none();
    }
    let generation = state.start_burst(device_id);
    UpdateResult::task(Task::ClearBurst { generation })
}

/// Submit the add-device form.
///
/// Blank name/brand means the store declines silently and the form stays
/// open; on success the form closes and the cursor jumps to the new device
/// at the top of the dashboard.
pub(crate) fn handle_submit_add(state: &mut AppState) -> UpdateResult {
    let name = state.add_form.name.clone();
    let brand = state.add_form.brand.clone();
    let kind = state.add_form.kind();

    if state.devices.add(&name, &brand, kind).is_some() {
        state.mode = InputMode::Normal;
        state.add_form = AddDeviceForm::default();
        state.search.clear();
        state.cursor = 0;
    }
    UpdateResult::none()
}
