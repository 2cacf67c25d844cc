//! Per-room append-only message logs.
//!
//! One `Vec<Message>` per room, held in a `DashMap` so the single writer and
//! any number of readers share it without an external lock. Logs grow
//! without bound; only the read window is capped.

use std::sync::Arc;

use dashmap::DashMap;
use parlor_types::message::Message;

/// Maximum number of messages returned by a read.
pub const RECENT_LIMIT: usize = 20;

/// Concurrent room-id -> message-log mapping.
///
/// Cloning produces a shared view of the same underlying data. Reads clone
/// the log out so no `DashMap` guard outlives the call; mutation happens
/// only through [`MessageLogs::push`], which the writer task alone invokes.
#[derive(Debug, Clone, Default)]
pub struct MessageLogs {
    inner: Arc<DashMap<String, Vec<Message>>>,
}

impl MessageLogs {
    /// Create an empty log store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
        }
    }

    /// Ensure an empty log exists for `room_id`.
    ///
    /// Called during room creation, before the directory entry becomes
    /// visible, so a room can never be observed without a queryable log.
    pub fn init(&self, room_id: &str) {
        self.inner.entry(room_id.to_string()).or_default();
    }

    /// Append a committed message to its room's log.
    pub fn push(&self, msg: Message) {
        self.inner.entry(msg.room_id.clone()).or_default().push(msg);
    }

    /// Cloned copy of the full committed log, or `None` if no log exists.
    pub fn snapshot(&self, room_id: &str) -> Option<Vec<Message>> {
        self.inner.get(room_id).map(|log| log.value().clone())
    }

    /// The trailing [`RECENT_LIMIT`] messages in ascending id order.
    ///
    /// Works on a clone of the log: the stable sort is defensive (the writer
    /// already commits in order) and the truncation never touches the stored
    /// log.
    pub fn recent(&self, room_id: &str) -> Option<Vec<Message>> {
        let mut log = self.snapshot(room_id)?;
        log.sort_by(|a, b| a.id.cmp(&b.id));
        if log.len() > RECENT_LIMIT {
            log.drain(..log.len() - RECENT_LIMIT);
        }
        Some(log)
    }

    /// Number of committed messages in a room's log, or `None` if no log.
    pub fn len(&self, room_id: &str) -> Option<usize> {
        self.inner.get(room_id).map(|log| log.value().len())
    }
}
