//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `access` - Plan/module access resolution, navigation and page gating

pub mod access;
pub mod foundation;
