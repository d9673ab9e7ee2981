//! Action dispatcher: spawns background tasks for UpdateActions
//!
//! Every task ends by sending a message back through the channel; the
//! update function decides whether the completion is still current.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::warn;

use omnihub_app::handler::BURST_CLEAR;
use omnihub_app::message::Message;
use omnihub_app::{Task, UpdateAction, PAIRING_DELAY, SCAN_DELAY, TRANSMIT_CLEAR};
use omnihub_assist::{reply_or_fallback, CompletionService};

/// Execute an action by spawning a background task
pub fn handle_action(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    assistant: Arc<dyn CompletionService>,
) {
    match action {
        UpdateAction::SpawnTask(task) => {
            tokio::spawn(async move {
                execute_task(task, msg_tx, assistant).await;
            });
        }
    }
}

async fn execute_task(
    task: Task,
    msg_tx: mpsc::Sender<Message>,
    assistant: Arc<dyn CompletionService>,
) {
    let message = match task {
        Task::ClearBurst { generation } => {
            tokio::time::sleep(BURST_CLEAR).await;
            Message::BurstCleared { generation }
        }
        Task::ClearTransmit { seq } => {
            tokio::time::sleep(TRANSMIT_CLEAR).await;
            Message::TransmitCleared { seq }
        }
        Task::CompleteScan { token, tenths } => {
            tokio::time::sleep(SCAN_DELAY).await;
            Message::FmScanCompleted { token, tenths }
        }
        Task::CompletePairing { token } => {
            tokio::time::sleep(PAIRING_DELAY).await;
            Message::FmPairingCompleted { token }
        }
        Task::AskAssistant {
            seq,
            prompt,
            context,
        } => {
            let reply = reply_or_fallback(assistant.complete(&prompt, &context).await);
            Message::AssistantCompleted { seq, reply }
        }
    };

    if let Err(e) = msg_tx.send(message).await {
        warn!("Task completion dropped, channel closed: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use omnihub_assist::FALLBACK_REPLY;
    use omnihub_core::{Error, Result};

    struct CannedAssistant {
        reply: Result<String>,
    }

    #[async_trait]
    impl CompletionService for CannedAssistant {
        async fn complete(&self, _prompt: &str, _context: &str) -> Result<String> {
            match &self.reply {
                Ok(s) => Ok(s.clone()),
                Err(_) => Err(Error::assistant("canned failure")),
            }
        }
    }

    #[tokio::test]
    async fn test_ask_assistant_sends_completion() {
        let (tx, mut rx) = mpsc::channel(4);
        let service: Arc<dyn CompletionService> = Arc::new(CannedAssistant {
            reply: Ok("TV is on.".to_string()),
        });

        handle_action(
            UpdateAction::SpawnTask(Task::AskAssistant {
                seq: 1,
                prompt: "turn on the tv".to_string(),
                context: "Living Room TV (Hisense TV)".to_string(),
            }),
            tx,
            service,
        );

        let Some(Message::AssistantCompleted { seq, reply }) = rx.recv().await else {
            panic!("expected a completion message");
        };
        assert_eq!(seq, 1);
        assert_eq!(reply, "TV is on.");
    }

    #[tokio::test]
    async fn test_ask_assistant_failure_maps_to_fallback() {
        let (tx, mut rx) = mpsc::channel(4);
        let service: Arc<dyn CompletionService> = Arc::new(CannedAssistant {
            reply: Err(Error::assistant("boom")),
        });

        handle_action(
            UpdateAction::SpawnTask(Task::AskAssistant {
                seq: 7,
                prompt: "hello".to_string(),
                context: String::new(),
            }),
            tx,
            service,
        );

        let Some(Message::AssistantCompleted { seq, reply }) = rx.recv().await else {
            panic!("expected a completion message");
        };
        assert_eq!(seq, 7);
        assert_eq!(reply, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_clear_transmit_echoes_seq() {
        let (tx, mut rx) = mpsc::channel(4);
        let service: Arc<dyn CompletionService> = Arc::new(CannedAssistant {
            reply: Ok(String::new()),
        });

        handle_action(
            UpdateAction::SpawnTask(Task::ClearTransmit { seq: 3 }),
            tx,
            service,
        );

        let Some(Message::TransmitCleared { seq }) = rx.recv().await else {
            panic!("expected a clear message");
        };
        assert_eq!(seq, 3);
    }
}
