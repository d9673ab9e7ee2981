//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppState, InputMode, Tab};

use super::{assistant, devices, fm, keys, remote, UpdateResult};

/// Process a message and update state.
/// Returns optional follow-up message and/or action.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = keys::handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        Message::SelectTab(tab) => {
            state.tab = tab;
            if tab == Tab::Dashboard && state.mode == InputMode::Normal {
                state.clamp_cursor();
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Dashboard Messages
        // ─────────────────────────────────────────────────────────
        Message::ActivateDevice { device_id } => {
            state.activate_device(&device_id);
            UpdateResult::none()
        }

        Message::TogglePower { device_id } => devices::handle_toggle_power(state, &device_id),

        Message::BurstCleared { generation } => {
            state.clear_burst(generation);
            UpdateResult::none()
        }

        Message::SubmitAddDevice => devices::handle_submit_add(state),

        // ─────────────────────────────────────────────────────────
        // Remote Messages
        // ─────────────────────────────────────────────────────────
        Message::RemoteButton { command } => remote::handle_remote_button(state, command),

        Message::TransmitCleared { seq } => {
            state.transmit.clear_indicator(seq);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Broadcast Panel Messages
        // ─────────────────────────────────────────────────────────
        Message::FmStep { up } => fm::handle_step(state, up),
        Message::FmScan => fm::handle_scan(state),
        Message::FmScanCompleted { token, tenths } => {
            state.fm.complete_scan(token, tenths);
            UpdateResult::none()
        }
        Message::FmTogglePairing => fm::handle_toggle_pairing(state),
        Message::FmPairingCompleted { token } => {
            state.fm.complete_pairing(token);
            UpdateResult::none()
        }
        Message::FmTogglePlayback => {
            state.fm.toggle_playback();
            UpdateResult::none()
        }
        Message::FmToggleTransmit => {
            state.fm.toggle_transmitting();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Assistant Messages
        // ─────────────────────────────────────────────────────────
        Message::AssistantSubmit => assistant::handle_submit(state),

        Message::AssistantCompleted { seq, reply } => {
            state.assistant.complete(seq, reply);
            UpdateResult::none()
        }
    }
}
