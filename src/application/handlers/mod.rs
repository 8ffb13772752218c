//! Command and query handlers.

pub mod access;

pub use access::*;
