//! Chat message type and the post-message request DTO.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single committed chat message.
///
/// `id` is a UUIDv7 assigned by the serialized writer at commit time. It is
/// the sequence marker for the room's log: time-ordered, lexically sortable,
/// and monotonic within the process (the uuid crate's shared v7 context
/// guards against same-millisecond regressions). Readers sort by `id`, never
/// by `timestamp`, which is informational wall-clock time only.
///
/// Messages are immutable once committed; there is no edit or delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub room_id: String,
    pub timestamp: DateTime<Utc>,
    pub sender: String,
    pub content: String,
}

/// Request body for `POST /rooms/{id}/messages`.
#[derive(Debug, Clone, Deserialize)]
pub struct PostMessageRequest {
    pub sender: String,
    pub content: String,
}
