//! Access-control resolution.
//!
//! Decides, for one signed-in session, which navigation entries are listed
//! and how each routed page renders.
//!
//! - `session` - per-user session state and lenient payload parsing
//! - `context` - the injectable session + policy pair the predicates read
//! - `catalog` - static navigation catalog and page-route table
//! - `navigation` - catalog filtering into a navigation tree
//! - `page_gate` - three-way render decision per page

mod catalog;
mod context;
mod errors;
mod module_key;
mod navigation;
mod page_gate;
mod plan;
mod role;
mod session;

pub use catalog::{
    route_for_path, CatalogChild, CatalogEntry, CatalogTarget, PageAccess, PageRoute,
    ADMIN_GROUP_NAME, ADMIN_PLANS_PATH, NAV_CATALOG, PAGE_ROUTES,
};
pub use context::{AccessContext, AccessPolicy};
pub use errors::AccessError;
pub use module_key::ModuleKey;
pub use navigation::{NavEntry, NavTarget, NavTree, NavigationBuilder};
pub use page_gate::{guard, guard_path, RenderDecision};
pub use plan::{PlanKey, FREE_TRIAL_PLAN};
pub use role::{Role, SUPER_ADMIN_ROLE};
pub use session::{parse_modules, parse_plans, parse_roles, ModuleMap, SessionState};
