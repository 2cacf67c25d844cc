//! HTTP adapter layer for Parlor.
//!
//! Thin translation between the wire format and the chat store: path and
//! body parsing, status-code mapping, JSON shaping. All semantics live in
//! `parlor-core`.

pub mod error;
pub mod handlers;
pub mod router;
