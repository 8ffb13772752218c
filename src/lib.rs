//! Fleet Console - access resolution for the fleet operations dashboard
//!
//! Decides, per signed-in session, which navigation entries the dashboard
//! lists and whether each routed page renders, shows a locked-feature
//! upsell, or is not found. Decisions are driven by the session's subscribed
//! plans, enabled modules and roles.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
