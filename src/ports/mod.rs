//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionStore` - per-user session state, written by the auth flow

mod session_store;

pub use session_store::{SessionRecord, SessionStore};
