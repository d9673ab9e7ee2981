//! Assistant panel handlers

use crate::state::AppState;

use super::{Task, UpdateResult};

/// Submit the assistant input.
///
/// The device context string is captured at submit time, so the assistant
/// reasons about the collection as it was when the user asked.
pub(crate) fn handle_submit(state: &mut AppState) -> UpdateResult {
    let context = state.device_context();
    match state.assistant.submit() {
        Some(request) => UpdateResult::task(Task::AskAssistant {
            seq: request.seq,
            prompt: request.prompt,
            context,
        }),
        None => UpdateResult::none(),
    }
}
