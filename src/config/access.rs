//! Access-resolution configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::access::{AccessPolicy, PlanKey, FREE_TRIAL_PLAN};

/// Access policy settings
#[derive(Debug, Clone, Deserialize)]
pub struct AccessConfig {
    /// Plan key whose holders preview every feature
    #[serde(default = "default_trial_plan_key")]
    pub trial_plan_key: String,
}

impl AccessConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.trial_plan_key.trim().is_empty() {
            return Err(ValidationError::MissingRequired("ACCESS__TRIAL_PLAN_KEY"));
        }
        Ok(())
    }

    /// Builds the domain policy.
    pub fn policy(&self) -> Result<AccessPolicy, ValidationError> {
        let trial_plan = PlanKey::new(self.trial_plan_key.as_str())
            .map_err(|_| ValidationError::MissingRequired("ACCESS__TRIAL_PLAN_KEY"))?;
        Ok(AccessPolicy::new(trial_plan))
    }
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            trial_plan_key: default_trial_plan_key(),
        }
    }
}

fn default_trial_plan_key() -> String {
    FREE_TRIAL_PLAN.to_string()
}
