//! HTTP adapter for access resolution.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{AccessAppState, AuthenticatedUser, USER_ID_HEADER};
pub use routes::access_router;
