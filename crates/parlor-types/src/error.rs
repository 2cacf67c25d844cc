use thiserror::Error;

/// Errors produced by the chat store.
///
/// There is no transient class: the core does no I/O, so every failure is
/// deterministic given the same inputs and store state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The referenced room identifier is absent from the directory.
    #[error("room '{0}' not found")]
    RoomNotFound(String),

    /// Blank name, sender, or content; rejected before the write path.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The serialized writer task is gone and cannot acknowledge appends.
    #[error("message writer is unavailable")]
    WriterClosed,
}
