//! Explicit persistence command queue
//!
//! Mutation handlers never write to the store; they emit persistence
//! commands that flow through one mpsc channel into a single task. Chat
//! snapshots are debounced so a burst of edits becomes one write, and every
//! write is awaited before the next starts, so the last command enqueued is
//! always the last document version on the wire. When the channel closes the
//! task drains its pending snapshot before exiting, so quitting mid-burst
//! does not lose the final state.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::timeout;

use crate::message::Message;
use solomon_core::prelude::*;
use solomon_core::Chat;
use solomon_remote::{ChatStore, DocumentStore};

/// Default time a chat snapshot sits in the queue before it is written.
pub const DEFAULT_SAVE_DEBOUNCE: Duration = Duration::from_millis(400);

/// A persistence command carrying the full document value to write.
#[derive(Debug, Clone)]
pub enum PersistCommand {
    /// Overwrite the chats document with this snapshot of the collection.
    /// Empty snapshots are dropped: an empty collection is never persisted.
    Chats(Vec<Chat>),

    /// Overwrite the settings document. Not debounced.
    DarkMode(bool),
}

/// Spawn the persistence task.
///
/// Failures are reported back to the TEA loop as [`Message::PersistFailed`]
/// (best effort -- if the message channel is full or closed the failure is
/// only logged).
pub fn spawn_persistence_task<S>(
    gateway: ChatStore<S>,
    mut rx: mpsc::Receiver<PersistCommand>,
    debounce: Duration,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()>
where
    S: DocumentStore + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let mut pending: Option<Vec<Chat>> = None;

        loop {
            let next = if pending.is_some() {
                match timeout(debounce, rx.recv()).await {
                    Ok(command) => command,
                    Err(_) => {
                        // Debounce window elapsed with no newer snapshot.
                        flush_chats(&gateway, &mut pending, &msg_tx).await;
                        continue;
                    }
                }
            } else {
                rx.recv().await
            };

            match next {
                Some(PersistCommand::Chats(chats)) => {
                    if chats.is_empty() {
                        // The source never persisted an empty collection;
                        // an older pending snapshot would be stale, drop it too.
                        debug!("Skipping persistence of empty chat collection");
                        pending = None;
                    } else {
                        pending = Some(chats);
                    }
                }
                Some(PersistCommand::DarkMode(dark_mode)) => {
                    if let Err(e) = gateway.save_dark_mode(dark_mode).await {
                        report_failure(&msg_tx, &e);
                    }
                }
                None => {
                    // Channel closed: drain the final snapshot, then stop.
                    flush_chats(&gateway, &mut pending, &msg_tx).await;
                    break;
                }
            }
        }
        debug!("Persistence task stopped");
    })
}

async fn flush_chats<S: DocumentStore + Send + Sync>(
    gateway: &ChatStore<S>,
    pending: &mut Option<Vec<Chat>>,
    msg_tx: &mpsc::Sender<Message>,
) {
    if let Some(chats) = pending.take() {
        if let Err(e) = gateway.save_chats(&chats).await {
            report_failure(msg_tx, &e);
        }
    }
}

fn report_failure(msg_tx: &mpsc::Sender<Message>, error: &Error) {
    warn!("Persistence write failed: {error}");
    let _ = msg_tx.try_send(Message::PersistFailed {
        error: error.to_string(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use solomon_core::Result;
    use solomon_remote::MemoryStore;

    fn chat(id: &str) -> Chat {
        Chat::new(id, format!("chat {id}"))
    }

    async fn run_to_completion(
        store: MemoryStore,
        commands: Vec<PersistCommand>,
    ) -> (MemoryStore, mpsc::Receiver<Message>) {
        let (msg_tx, msg_rx) = mpsc::channel(16);
        let (tx, rx) = mpsc::channel(16);
        let handle = spawn_persistence_task(
            ChatStore::new(store.clone(), "solomon"),
            rx,
            DEFAULT_SAVE_DEBOUNCE,
            msg_tx,
        );

        for command in commands {
            tx.send(command).await.unwrap();
        }
        drop(tx);
        handle.await.unwrap();
        (store, msg_rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_of_snapshots_coalesces_to_last_write() {
        let (store, _) = run_to_completion(
            MemoryStore::new(),
            vec![
                PersistCommand::Chats(vec![chat("1")]),
                PersistCommand::Chats(vec![chat("1"), chat("2")]),
                PersistCommand::Chats(vec![chat("1"), chat("2"), chat("3")]),
            ],
        )
        .await;

        // One write, holding the final snapshot.
        assert_eq!(store.set_calls(), 1);
        let doc = store.raw("solomon", "chats").unwrap();
        assert_eq!(doc["chats"].as_array().unwrap().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_snapshot_flushes_after_debounce_while_queue_stays_open() {
        let store = MemoryStore::new();
        let (msg_tx, _msg_rx) = mpsc::channel(16);
        let (tx, rx) = mpsc::channel(16);
        let handle = spawn_persistence_task(
            ChatStore::new(store.clone(), "solomon"),
            rx,
            DEFAULT_SAVE_DEBOUNCE,
            msg_tx,
        );

        tx.send(PersistCommand::Chats(vec![chat("1")]))
            .await
            .unwrap();

        // Paused time auto-advances past the debounce window; the write
        // lands even though the queue is still open.
        tokio::time::sleep(DEFAULT_SAVE_DEBOUNCE * 2).await;
        assert_eq!(store.set_calls(), 1);

        drop(tx);
        handle.await.unwrap();
        // Nothing left pending, so shutdown does not write again.
        assert_eq!(store.set_calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_collection_is_never_persisted() {
        let (store, _) = run_to_completion(
            MemoryStore::new(),
            vec![PersistCommand::Chats(Vec::new())],
        )
        .await;
        assert_eq!(store.set_calls(), 0);

        // An empty snapshot also supersedes an older pending one.
        let (store, _) = run_to_completion(
            MemoryStore::new(),
            vec![
                PersistCommand::Chats(vec![chat("1")]),
                PersistCommand::Chats(Vec::new()),
            ],
        )
        .await;
        assert_eq!(store.set_calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_snapshot_drains_on_shutdown() {
        // Channel closes before the debounce window elapses; the final
        // snapshot must still land.
        let (store, _) = run_to_completion(
            MemoryStore::new(),
            vec![PersistCommand::Chats(vec![chat("1")])],
        )
        .await;

        assert_eq!(store.set_calls(), 1);
        assert!(store.raw("solomon", "chats").is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dark_mode_writes_are_not_debounced() {
        let (store, _) = run_to_completion(
            MemoryStore::new(),
            vec![
                PersistCommand::DarkMode(true),
                PersistCommand::DarkMode(false),
            ],
        )
        .await;

        assert_eq!(store.set_calls(), 2);
        assert_eq!(
            store.raw("solomon", "settings").unwrap(),
            serde_json::json!({"darkMode": false})
        );
    }

    /// Store whose writes always fail, for the failure-reporting path.
    #[derive(Debug, Default)]
    struct BrokenStore;

    impl DocumentStore for BrokenStore {
        async fn get(&self, _collection: &str, _document: &str) -> Result<Option<Value>> {
            Ok(None)
        }

        async fn set(&self, _collection: &str, _document: &str, _value: &Value) -> Result<()> {
            Err(solomon_core::Error::store("disk on fire"))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_write_failure_reports_back_to_the_loop() {
        let (msg_tx, mut msg_rx) = mpsc::channel(16);
        let (tx, rx) = mpsc::channel(16);
        let handle = spawn_persistence_task(
            ChatStore::new(BrokenStore, "solomon"),
            rx,
            DEFAULT_SAVE_DEBOUNCE,
            msg_tx,
        );

        tx.send(PersistCommand::Chats(vec![chat("1")]))
            .await
            .unwrap();
        drop(tx);
        handle.await.unwrap();

        match msg_rx.try_recv() {
            Ok(Message::PersistFailed { error }) => assert!(error.contains("disk on fire")),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
