//! Storage and concurrency core for Parlor.
//!
//! Two shared collections back the whole store: a room directory and a set of
//! per-room message logs, both `DashMap`-based so readers never take an
//! external lock. All appends funnel through a single writer task
//! (`writer`); readers observe committed state only. The `ChatStore` facade
//! wires the pieces together and is the only type the HTTP adapter touches.
//!
//! This crate depends only on `parlor-types` -- never on axum or any
//! adapter-layer crate.

pub mod directory;
pub mod log;
pub mod store;
mod writer;

pub use store::ChatStore;
