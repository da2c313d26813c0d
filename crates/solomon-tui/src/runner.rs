//! Main TUI runner - entry point and event loop
//!
//! Wires the pieces together: remote clients from settings, the message
//! and persistence channels, the signal handler, the startup load task,
//! and the TEA loop (poll → update → render).

use std::sync::Arc;

use tokio::sync::mpsc;

use solomon_app::config::Settings;
use solomon_app::message::Message;
use solomon_app::persist::{self, PersistCommand};
use solomon_app::state::AppState;
use solomon_app::{process, signals};
use solomon_core::prelude::*;
use solomon_remote::{ChatStore, HttpDocumentStore, PersonaClient, DEFAULT_PERSONA};

use super::{event, render, terminal};

/// Run the TUI application
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Build the remote clients before touching the terminal, so a bad
    // store URL fails as a plain error message instead of a garbled screen.
    let store = HttpDocumentStore::new(
        &settings.store.base_url,
        settings.store.bearer_token.clone(),
    )?;
    let persona = Arc::new(PersonaClient::new(
        settings.persona.endpoint.clone(),
        settings.persona.model.clone(),
        settings
            .persona
            .persona
            .clone()
            .unwrap_or_else(|| DEFAULT_PERSONA.to_string()),
    ));

    // Initialize terminal
    let mut term = ratatui::init();

    // Create initial state with settings
    let mut state = AppState::with_settings(settings.clone());
    if let Ok((width, _height)) = crossterm::terminal::size() {
        state.apply_resize(width);
    }

    // Unified message channel (signal handler, remote results, etc.)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Persistence command queue
    let (persist_tx, persist_rx) = mpsc::channel::<PersistCommand>(256);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx.clone());

    let persist_handle = persist::spawn_persistence_task(
        ChatStore::new(store.clone(), settings.store.collection.clone()),
        persist_rx,
        settings.behavior.save_debounce(),
        msg_tx.clone(),
    );

    // Startup load: the settings record first (it is tiny and re-themes the
    // UI immediately), then the chat collection.
    {
        let gateway = ChatStore::new(store, settings.store.collection.clone());
        let tx = msg_tx.clone();
        tokio::spawn(async move {
            let dark_mode = gateway.load_dark_mode().await;
            let _ = tx.send(Message::DarkModeLoaded { dark_mode }).await;

            let chats = gateway.load_chats().await;
            let _ = tx.send(Message::ChatsLoaded { chats }).await;
        });
    }

    // Run the main loop
    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &persist_tx, &persona);

    // Closing the queue lets the persistence task drain its final pending
    // snapshot before the process exits.
    drop(persist_tx);
    if let Err(e) = persist_handle.await {
        warn!("Persistence task ended abnormally: {e}");
    }

    // Restore terminal
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    persist_tx: &mpsc::Sender<PersistCommand>,
    persona: &Arc<PersonaClient>,
) -> Result<()> {
    while !state.should_quit() {
        // Process external messages (signal handler, remote results)
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg, &msg_tx, persist_tx, persona);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process::process_message(state, message, &msg_tx, persist_tx, persona);
        }
    }

    Ok(())
}
