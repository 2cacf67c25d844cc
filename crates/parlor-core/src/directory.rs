//! Concurrent room directory keyed by room name.
//!
//! Identifier policy: the caller-supplied name *is* the identifier. A room
//! denotes a stable named channel, so repeated creates with the same name
//! upsert the existing entry rather than minting a fresh id per call.
//! Uniqueness of the identifier space falls out of the map itself.

use std::sync::Arc;

use dashmap::DashMap;
use parlor_types::room::Room;

/// Concurrent name -> Room mapping.
///
/// Cloning produces a shared view of the same underlying data (backed by
/// `Arc`). All reads return cloned values -- never hold a `DashMap` guard
/// across await.
#[derive(Debug, Clone, Default)]
pub struct RoomDirectory {
    inner: Arc<DashMap<String, Room>>,
}

impl RoomDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
        }
    }

    /// Insert the room if absent, otherwise update its mutable fields.
    ///
    /// A supplied `description` overwrites the stored one; `None` preserves
    /// whatever is already there. Returns the resulting room.
    pub fn upsert(&self, name: &str, description: Option<String>) -> Room {
        let mut entry = self
            .inner
            .entry(name.to_string())
            .or_insert_with(|| Room::named(name, None));
        if description.is_some() {
            entry.description = description;
        }
        entry.clone()
    }

    /// Get a cloned copy of the room at `id`, or `None` if absent.
    pub fn get(&self, id: &str) -> Option<Room> {
        self.inner.get(id).map(|r| r.value().clone())
    }

    /// Whether a room with this identifier exists.
    pub fn contains(&self, id: &str) -> bool {
        self.inner.contains_key(id)
    }

    /// Unordered snapshot of all rooms.
    pub fn list(&self) -> Vec<Room> {
        self.inner.iter().map(|r| r.value().clone()).collect()
    }

    /// Number of rooms in the directory.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
