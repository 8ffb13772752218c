//! Subscription plan keys.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Plan key of the free trial, which previews every catalog feature.
pub const FREE_TRIAL_PLAN: &str = "free-trial";

/// Opaque identifier of a purchasable subscription plan.
///
/// A session may hold several plans at once; only the trial sentinel has
/// meaning to access resolution, every other key is compared verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanKey(String);

impl PlanKey {
    /// Creates a plan key, rejecting blank values.
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ValidationError::empty_field("plan_key"));
        }
        Ok(Self(key))
    }

    /// The default free-trial sentinel.
    pub fn free_trial() -> Self {
        Self(FREE_TRIAL_PLAN.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlanKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_trial_uses_sentinel_value() {
        assert_eq!(PlanKey::free_trial().as_str(), "free-trial");
    }

    #[test]
    fn blank_plan_key_is_rejected() {
        assert!(PlanKey::new("").is_err());
        assert!(PlanKey::new("  ").is_err());
    }

    #[test]
    fn plan_keys_compare_verbatim() {
        assert_ne!(PlanKey::new("Free-Trial").unwrap(), PlanKey::free_trial());
    }
}
