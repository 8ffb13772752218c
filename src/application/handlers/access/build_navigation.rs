//! BuildNavigationHandler - Query handler for the sidebar tree.

use std::sync::Arc;

use crate::domain::access::{AccessContext, AccessError, AccessPolicy, NavTree, NavigationBuilder};
use crate::domain::foundation::UserId;
use crate::ports::SessionStore;

#[derive(Debug, Clone)]
pub struct BuildNavigationQuery {
    pub user_id: UserId,
    /// Route currently shown, used to pick the expanded group.
    pub active_path: Option<String>,
}

#[derive(Debug, Clone)]
pub struct BuildNavigationResult {
    pub tree: NavTree,
    pub expanded_group: Option<&'static str>,
}

/// Filters the navigation catalog for the user's current session.
///
/// Users without a session get the signed-out view, which is empty.
pub struct BuildNavigationHandler {
    store: Arc<dyn SessionStore>,
    policy: Arc<AccessPolicy>,
    builder: NavigationBuilder,
}

impl BuildNavigationHandler {
    pub fn new(store: Arc<dyn SessionStore>, policy: Arc<AccessPolicy>) -> Self {
        Self {
            store,
            policy,
            builder: NavigationBuilder::new(),
        }
    }

    pub async fn handle(
        &self,
        query: BuildNavigationQuery,
    ) -> Result<BuildNavigationResult, AccessError> {
        let session = self.store.load_state(&query.user_id).await?;
        let ctx = AccessContext::new(&session, &self.policy);

        let tree = self.builder.build(&ctx);
        let expanded_group = query
            .active_path
            .as_deref()
            .and_then(|path| tree.expanded_group(path));

        Ok(BuildNavigationResult {
            tree,
            expanded_group,
        })
    }
}
