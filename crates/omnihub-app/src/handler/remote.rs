//! Remote button dispatch
//!
//! Every button press goes through the transmit log for its cosmetic
//! protocol record. A handful of commands additionally nudge the layout's
//! local display parameters, and POWER is the single command that touches
//! the device store (as a follow-up message, so it shares the dashboard
//! toggle path).

use crate::message::Message;
use crate::remote::{RemoteState, LIGHT_COLORS};
use crate::state::AppState;

use super::{Task, UpdateResult};

/// AC setpoint limits, °C
const SETPOINT_MIN: i8 = 16;
const SETPOINT_MAX: i8 = 30;

pub(crate) fn handle_remote_button(state: &mut AppState, command: &'static str) -> UpdateResult {
    let Some(device_id) = state.selected_device_id.clone() else {
        return UpdateResult::none();
    };

    let seq = state.transmit.record(command);

    if let Some(remote) = state.remote.as_mut() {
        apply_local_effect(remote, command);
    }

    let mut result = UpdateResult::task(Task::ClearTransmit { seq });
    if command == "POWER" {
        result.message = Some(Message::TogglePower { device_id });
    }
    result
}

/// Nudge the layout's ephemeral display parameters for commands that have a
/// visible local effect. Everything else is log-only.
fn apply_local_effect(remote: &mut RemoteState, command: &str) {
    match remote {
        RemoteState::Tv { channel, volume } => match command {
            "CH_UP" => *channel = channel.saturating_add(1),
            "CH_DOWN" => *channel = channel.saturating_sub(1).max(1),
            "VOL_UP" => *volume = (*volume + 5).min(100),
            "VOL_DOWN" => *volume = volume.saturating_sub(5),
            _ => {}
        },
        RemoteState::Ac { setpoint } => match command {
            "TEMP_UP" => *setpoint = (*setpoint + 1).min(SETPOINT_MAX),
            "TEMP_DOWN" => *setpoint = (*setpoint - 1).max(SETPOINT_MIN),
            _ => {}
        },
        RemoteState::Light { brightness, color } => match command {
            "BRIGHT_UP" => *brightness = (*brightness + 5).min(100),
            "BRIGHT_DOWN" => *brightness = brightness.saturating_sub(5),
            "COLOR_CYCLE" => *color = (*color + 1) % LIGHT_COLORS.len(),
            _ => {}
        },
        RemoteState::Soundbar { volume } => match command {
            "VOL_UP" => *volume = (*volume + 5).min(100),
            "VOL_DOWN" => *volume = volume.saturating_sub(5),
            _ => {}
        },
        RemoteState::Decoder => {}
    }
}
