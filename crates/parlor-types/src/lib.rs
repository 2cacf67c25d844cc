//! Shared domain types for Parlor.
//!
//! This crate contains the types exchanged between the storage core and the
//! HTTP adapter: Room, Message, the request DTOs, and the store error enum.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod error;
pub mod message;
pub mod room;
