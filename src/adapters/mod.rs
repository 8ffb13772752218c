//! Adapters - Implementations of port interfaces.
//!
//! - `storage` - Session store implementations (in-memory)
//! - `http` - Axum REST API over the access handlers

pub mod http;
pub mod storage;

pub use http::{app_router, AccessAppState};
pub use storage::InMemorySessionStore;
