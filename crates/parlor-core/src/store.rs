//! Store facade tying the directory, the logs, and the writer together.
//!
//! One `ChatStore` is constructed per process and handed to the HTTP adapter
//! by clone; there is no ambient singleton. All handles are `Arc`-backed, so
//! clones share the same directory, logs, and writer queue.

use parlor_types::error::StoreError;
use parlor_types::message::Message;
use parlor_types::room::Room;
use tokio::sync::{mpsc, oneshot};
use tracing::info;

use crate::directory::RoomDirectory;
use crate::log::MessageLogs;
use crate::writer::{self, AppendRequest};

/// In-memory chat store: room directory plus per-room message logs.
///
/// Reads go straight to the shared maps; appends are forwarded to the single
/// writer task and awaited, so every append call returns only once its
/// request has been committed or rejected in total order.
///
/// Must be constructed inside a tokio runtime (it spawns the writer task).
#[derive(Debug, Clone)]
pub struct ChatStore {
    directory: RoomDirectory,
    logs: MessageLogs,
    append_tx: mpsc::UnboundedSender<AppendRequest>,
}

impl ChatStore {
    /// Create an empty store and spawn its writer task.
    ///
    /// The writer exits once the store (and every clone of it) is dropped.
    pub fn new() -> Self {
        let directory = RoomDirectory::new();
        let logs = MessageLogs::new();
        let (append_tx, append_rx) = mpsc::unbounded_channel();
        writer::spawn(directory.clone(), logs.clone(), append_rx);
        Self {
            directory,
            logs,
            append_tx,
        }
    }

    /// Create the room if it does not exist, otherwise update it.
    ///
    /// Idempotent per name: a repeated call never creates a second entry; it
    /// updates the description when one is supplied and preserves it
    /// otherwise. The empty log is initialized *before* the directory entry
    /// becomes visible, so no caller can observe a room without a queryable
    /// log.
    pub fn create_or_get_room(
        &self,
        name: &str,
        description: Option<String>,
    ) -> Result<Room, StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::InvalidInput(
                "room name must not be empty".to_string(),
            ));
        }

        let created = !self.directory.contains(name);
        self.logs.init(name);
        let room = self.directory.upsert(name, description);
        if created {
            info!(room_id = %room.id, "room created");
        }
        Ok(room)
    }

    /// Look up a room by identifier.
    pub fn get_room(&self, id: &str) -> Result<Room, StoreError> {
        self.directory
            .get(id)
            .ok_or_else(|| StoreError::RoomNotFound(id.to_string()))
    }

    /// Unordered snapshot of all rooms.
    pub fn list_rooms(&self) -> Vec<Room> {
        self.directory.list()
    }

    /// Append a message to a room's log.
    ///
    /// Validates inputs, then enqueues the request with the writer and waits
    /// for its ack. The returned message carries the writer-assigned id and
    /// timestamp. Rejections leave every log untouched.
    pub async fn append_message(
        &self,
        room_id: &str,
        sender: &str,
        content: &str,
    ) -> Result<Message, StoreError> {
        if sender.trim().is_empty() {
            return Err(StoreError::InvalidInput(
                "sender must not be empty".to_string(),
            ));
        }
        if content.trim().is_empty() {
            return Err(StoreError::InvalidInput(
                "content must not be empty".to_string(),
            ));
        }

        let (reply, ack) = oneshot::channel();
        self.append_tx
            .send(AppendRequest {
                room_id: room_id.to_string(),
                sender: sender.to_string(),
                content: content.to_string(),
                reply,
            })
            .map_err(|_| StoreError::WriterClosed)?;

        ack.await.map_err(|_| StoreError::WriterClosed)?
    }

    /// The most recent messages of a room, ascending by sequence marker,
    /// capped at [`crate::log::RECENT_LIMIT`].
    pub fn recent_messages(&self, room_id: &str) -> Result<Vec<Message>, StoreError> {
        if !self.directory.contains(room_id) {
            return Err(StoreError::RoomNotFound(room_id.to_string()));
        }
        // Room creation initializes the log before the directory entry, so a
        // known room always has one.
        Ok(self.logs.recent(room_id).unwrap_or_default())
    }
}

impl Default for ChatStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn create_append_read_roundtrip() {
        let store = ChatStore::new();
        store.create_or_get_room("general", None).unwrap();

        store.append_message("general", "alice", "hi").await.unwrap();
        store.append_message("general", "bob", "hey").await.unwrap();

        let msgs = store.recent_messages("general").unwrap();
        assert_eq!(msgs.len(), 2);
        assert_eq!(msgs[0].sender, "alice");
        assert_eq!(msgs[1].sender, "bob");
        assert!(msgs[0].id < msgs[1].id);
    }

    #[tokio::test]
    async fn append_to_missing_room_fails_cleanly() {
        let store = ChatStore::new();
        store.create_or_get_room("general", None).unwrap();

        let err = store
            .append_message("nonexistent", "alice", "hi")
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::RoomNotFound("nonexistent".to_string()));
        assert_eq!(store.recent_messages("general").unwrap().len(), 0);
    }

    #[tokio::test]
    async fn read_missing_room_fails() {
        let store = ChatStore::new();
        assert_eq!(
            store.recent_messages("nonexistent").unwrap_err(),
            StoreError::RoomNotFound("nonexistent".to_string())
        );
        assert_eq!(
            store.get_room("nonexistent").unwrap_err(),
            StoreError::RoomNotFound("nonexistent".to_string())
        );
    }

    #[tokio::test]
    async fn read_caps_at_last_twenty() {
        let store = ChatStore::new();
        store.create_or_get_room("general", None).unwrap();
        for i in 1..=25 {
            store
                .append_message("general", "alice", &format!("message {i}"))
                .await
                .unwrap();
        }

        let msgs = store.recent_messages("general").unwrap();
        assert_eq!(msgs.len(), 20);
        assert_eq!(msgs.first().unwrap().content, "message 6");
        assert_eq!(msgs.last().unwrap().content, "message 25");
    }

    #[tokio::test]
    async fn create_is_idempotent_and_updates_description() {
        let store = ChatStore::new();
        let first = store
            .create_or_get_room("general", Some("the lobby".to_string()))
            .unwrap();
        assert_eq!(first.description.as_deref(), Some("the lobby"));

        let second = store.create_or_get_room("general", None).unwrap();
        assert_eq!(second.description.as_deref(), Some("the lobby"));

        let third = store
            .create_or_get_room("general", Some("renamed".to_string()))
            .unwrap();
        assert_eq!(third.description.as_deref(), Some("renamed"));

        assert_eq!(store.list_rooms().len(), 1);
    }

    #[tokio::test]
    async fn recreating_room_keeps_messages() {
        let store = ChatStore::new();
        store.create_or_get_room("general", None).unwrap();
        store.append_message("general", "alice", "hi").await.unwrap();

        store.create_or_get_room("general", None).unwrap();
        assert_eq!(store.recent_messages("general").unwrap().len(), 1);
    }

    #[tokio::test]
    async fn blank_inputs_rejected_before_write_path() {
        let store = ChatStore::new();
        store.create_or_get_room("general", None).unwrap();

        assert!(matches!(
            store.create_or_get_room("  ", None),
            Err(StoreError::InvalidInput(_))
        ));
        assert!(matches!(
            store.append_message("general", "", "hi").await,
            Err(StoreError::InvalidInput(_))
        ));
        assert!(matches!(
            store.append_message("general", "alice", "   ").await,
            Err(StoreError::InvalidInput(_))
        ));
        assert_eq!(store.recent_messages("general").unwrap().len(), 0);
    }

    #[tokio::test]
    async fn concurrent_appends_all_commit_exactly_once_in_order() {
        let store = Arc::new(ChatStore::new());
        store.create_or_get_room("general", None).unwrap();

        let mut handles = Vec::new();
        for task in 0..8 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                let mut committed = Vec::new();
                for i in 0..25 {
                    let msg = store
                        .append_message("general", &format!("task{task}"), &format!("t{task}-m{i}"))
                        .await
                        .unwrap();
                    committed.push(msg.id);
                }
                committed
            }));
        }

        let mut acked = Vec::new();
        for handle in handles {
            acked.extend(handle.await.unwrap());
        }

        // Every acked message appears exactly once, and the full log is
        // strictly ordered by sequence marker.
        let log = store.logs.snapshot("general").unwrap();
        assert_eq!(log.len(), acked.len());
        assert!(log.windows(2).all(|w| w[0].id < w[1].id));
        let mut logged: Vec<_> = log.iter().map(|m| m.id).collect();
        logged.sort();
        acked.sort();
        assert_eq!(logged, acked);

        // Per-task submission order survives serialization.
        for task in 0..8 {
            let sender = format!("task{task}");
            let task_msgs: Vec<String> = log
                .iter()
                .filter(|m| m.sender == sender)
                .map(|m| m.content.clone())
                .collect();
            let expected: Vec<String> = (0..25).map(|i| format!("t{task}-m{i}")).collect();
            assert_eq!(task_msgs, expected);
        }
    }

    #[tokio::test]
    async fn concurrent_readers_see_only_committed_messages() {
        let store = Arc::new(ChatStore::new());
        store.create_or_get_room("general", None).unwrap();

        let writer = {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                for i in 0..200 {
                    store
                        .append_message("general", "alice", &format!("m{i}"))
                        .await
                        .unwrap();
                }
            })
        };

        let reader = {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                for _ in 0..200 {
                    let msgs = store.recent_messages("general").unwrap();
                    // Messages are whole and ordered at every observation.
                    assert!(msgs.iter().all(|m| !m.content.is_empty()));
                    assert!(msgs.windows(2).all(|w| w[0].id < w[1].id));
                    tokio::task::yield_now().await;
                }
            })
        };

        writer.await.unwrap();
        reader.await.unwrap();
        assert_eq!(store.recent_messages("general").unwrap().len(), 20);
    }

    #[tokio::test]
    async fn rooms_are_independent() {
        let store = ChatStore::new();
        store.create_or_get_room("general", None).unwrap();
        store.create_or_get_room("random", None).unwrap();

        store.append_message("general", "alice", "hi").await.unwrap();
        assert_eq!(store.recent_messages("general").unwrap().len(), 1);
        assert_eq!(store.recent_messages("random").unwrap().len(), 0);
    }
}
