//! Message processing: drives the TEA update loop and dispatches actions

use std::sync::Arc;

use tokio::sync::mpsc;

use omnihub_app::handler;
use omnihub_app::message::Message;
use omnihub_app::state::AppState;
use omnihub_assist::CompletionService;

use crate::actions::handle_action;

/// Process a message through the update function, chasing follow-up
/// messages to completion and spawning any requested background work.
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    assistant: &Arc<dyn CompletionService>,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), assistant.clone());
        }

        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use omnihub_app::state::Tab;
    use omnihub_app::InputKey;
    use omnihub_core::Result;

    struct SilentAssistant;

    #[async_trait]
    impl CompletionService for SilentAssistant {
        async fn complete(&self, _prompt: &str, _context: &str) -> Result<String> {
            Ok("ok".to_string())
        }
    }

    #[tokio::test]
    async fn test_follow_up_chain_is_chased() {
        let mut state = AppState::seeded();
        let (tx, _rx) = mpsc::channel(16);
        let assistant: Arc<dyn CompletionService> = Arc::new(SilentAssistant);

        // 'q' resolves through a follow-up Quit message in one call
        process_message(&mut state, Message::Key(InputKey::Char('q')), &tx, &assistant);
        assert!(state.should_quit());
    }

    #[tokio::test]
    async fn test_remote_power_chains_into_store_toggle() {
        let mut state = AppState::seeded();
        state.activate_device("1");
        let before = state.devices.find("1").unwrap().power;

        let (tx, mut rx) = mpsc::channel(16);
        let assistant: Arc<dyn CompletionService> = Arc::new(SilentAssistant);

        process_message(
            &mut state,
            Message::RemoteButton { command: "POWER" },
            &tx,
            &assistant,
        );

        assert_eq!(state.tab, Tab::Remotes);
        assert_eq!(state.devices.find("1").unwrap().power, before.toggled());
        // Both the transmit clear and the burst clear were scheduled
        assert!(rx.recv().await.is_some());
        assert!(rx.recv().await.is_some());
    }
}
