//! Main TUI runner: entry point and event loop

use std::sync::Arc;

use tokio::sync::mpsc;

use omnihub_app::config::Settings;
use omnihub_app::message::Message;
use omnihub_app::state::AppState;
use omnihub_app::{DeviceStore, JsonSnapshotStore, SnapshotStore};
use omnihub_assist::{CompletionService, GeminiClient};
use omnihub_core::prelude::*;

use crate::{event, process, render, terminal};

/// Run the TUI application
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let snapshot: Box<dyn SnapshotStore> = {
        let path = settings
            .storage
            .snapshot_path
            .clone()
            .unwrap_or_else(JsonSnapshotStore::default_path);
        info!("Device snapshot at {:?}", path);
        Box::new(JsonSnapshotStore::new(path))
    };

    let mut state = AppState::new(DeviceStore::load_or_seed(snapshot));

    let api_key = settings.assistant.resolve_api_key().unwrap_or_else(|| {
        warn!("No assistant API key configured; replies will fall back");
        String::new()
    });
    let assistant: Arc<dyn CompletionService> = Arc::new(GeminiClient::new(
        settings.assistant.api_base.clone(),
        settings.assistant.model.clone(),
        api_key,
    ));

    // Channel carrying background task completions back into the loop
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    let mut term = ratatui::init();
    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, assistant);
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    assistant: Arc<dyn CompletionService>,
) -> Result<()> {
    while !state.should_quit() {
        // Drain background task completions (non-blocking)
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg, &msg_tx, &assistant);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process::process_message(state, message, &msg_tx, &assistant);
        }
    }

    Ok(())
}
