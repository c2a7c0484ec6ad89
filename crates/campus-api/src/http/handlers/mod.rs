//! HTTP request handlers, one module per resource.

pub mod campus;
pub mod chat;
pub mod session;
