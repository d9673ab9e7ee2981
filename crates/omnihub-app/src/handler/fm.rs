//! Broadcast panel handlers

use crate::fm::PairingAction;
use crate::state::AppState;

use super::{Task, UpdateResult};

pub(crate) fn handle_step(state: &mut AppState, up: bool) -> UpdateResult {
    if up {
        state.fm.step_up();
    } else {
        state.fm.step_down();
    }
    UpdateResult::none()
}

/// Kick off a tuner sweep; requests while one is in flight are dropped.
pub(crate) fn handle_scan(state: &mut AppState) -> UpdateResult {
    match state.fm.start_scan() {
        Some((token, tenths)) => UpdateResult::task(Task::CompleteScan { token, tenths }),
        None => UpdateResult::none(),
    }
}

pub(crate) fn handle_toggle_pairing(state: &mut AppState) -> UpdateResult {
    match state.fm.toggle_pairing() {
        PairingAction::Started(token) => UpdateResult::task(Task::CompletePairing { token }),
        PairingAction::Unpaired | PairingAction::Ignored => UpdateResult::none(),
    }
}
