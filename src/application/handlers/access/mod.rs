//! Access handlers.
//!
//! ## Commands
//! - Establishing a session from the auth payload (sign-in)
//! - Ending a session (logout)
//! - Replacing a session's module map
//!
//! ## Queries
//! - Building the navigation tree
//! - Evaluating the page gate
//! - Summarising a session's access facts

mod build_navigation;
mod check_page_access;
mod end_session;
mod establish_session;
mod get_access_summary;
mod update_modules;

// Commands
pub use end_session::{EndSessionCommand, EndSessionHandler, EndSessionResult};
pub use establish_session::{
    EstablishSessionCommand, EstablishSessionHandler, EstablishSessionResult,
};
pub use update_modules::{UpdateModulesCommand, UpdateModulesHandler, UpdateModulesResult};

// Queries
pub use build_navigation::{BuildNavigationHandler, BuildNavigationQuery, BuildNavigationResult};
pub use check_page_access::{
    CheckPageAccessHandler, CheckPageAccessQuery, CheckPageAccessResult, PageTarget,
};
pub use get_access_summary::{AccessSummary, GetAccessSummaryHandler, GetAccessSummaryQuery};
