//! User roles.

use serde::{Deserialize, Serialize};

/// Reserved slug that unlocks the administration branch.
pub const SUPER_ADMIN_ROLE: &str = "super_admin";

/// A role granted to the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub slug: String,
    #[serde(default)]
    pub name: String,
}

impl Role {
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
        }
    }

    /// Exact, case-sensitive match on the reserved slug.
    pub fn is_super_admin(&self) -> bool {
        self.slug == SUPER_ADMIN_ROLE
    }
}
