//! HTTP request handlers, grouped by resource.

pub mod message;
pub mod room;
