//! Room metadata and the create-room request DTO.

use serde::{Deserialize, Serialize};

/// A named chat room.
///
/// Rooms use their name as the identifier: creating a room twice with the
/// same name upserts the existing entry instead of producing a duplicate.
/// The `id` field therefore always equals `name`; it is kept as a separate
/// field so the wire shape stays stable if the identifier policy ever
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Room {
    /// Build a room keyed by its name.
    pub fn named(name: &str, description: Option<String>) -> Self {
        Self {
            id: name.to_string(),
            name: name.to_string(),
            description,
        }
    }
}

/// Request body for `POST /rooms`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRoomRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
