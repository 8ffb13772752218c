//! Per-user session state.
//!
//! The authentication backend hands over a loosely-typed JSON document:
//!
//! ```text
//! { "id": "...", "roles": [{ "slug": "...", "name": "..." }],
//!   "subscribedPlans": ["free-trial", ...], "modules": { "dispatch": "basic", ... } }
//! ```
//!
//! Parsing is lenient. A field of the wrong shape (or missing, or `null`)
//! becomes an empty collection, so a corrupted session hides features rather
//! than failing navigation. Only the user id is mandatory.

use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use tracing::warn;

use super::{ModuleKey, PlanKey, Role};
use crate::domain::foundation::{UserId, ValidationError};

/// Enabled modules: raw key to tier label.
///
/// Keys are kept as strings because the backend may enable modules this
/// build does not know about. Presence alone enables a module.
pub type ModuleMap = BTreeMap<String, String>;

/// What the access predicates read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user_id: Option<UserId>,
    pub roles: Vec<Role>,
    pub subscribed_plans: BTreeSet<PlanKey>,
    pub modules: ModuleMap,
}

impl SessionState {
    /// The empty session seen after logout or before login.
    pub fn signed_out() -> Self {
        Self::default()
    }

    /// Builds a session from the authentication payload.
    ///
    /// # Errors
    ///
    /// Fails only when `id` is missing, blank, or neither a string nor a
    /// number.
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let user_id = parse_user_id(payload.get("id"))?;

        Ok(Self {
            user_id: Some(user_id),
            roles: parse_roles(payload.get("roles")),
            subscribed_plans: parse_plans(payload.get("subscribedPlans")),
            modules: parse_modules(payload.get("modules")),
        })
    }

    /// True iff `plan` is among the subscribed plans.
    pub fn plan_exists(&self, plan: &PlanKey) -> bool {
        self.subscribed_plans.contains(plan)
    }

    /// True iff `module` is a key of the module map, whatever its tier.
    pub fn module_exists(&self, module: ModuleKey) -> bool {
        self.modules.contains_key(module.as_str())
    }

    /// True iff any role carries the reserved super-admin slug.
    pub fn is_super_admin(&self) -> bool {
        self.roles.iter().any(Role::is_super_admin)
    }

    /// Tier label of an enabled module.
    pub fn module_tier(&self, module: ModuleKey) -> Option<&str> {
        self.modules.get(module.as_str()).map(String::as_str)
    }
}

fn parse_user_id(value: Option<&Value>) -> Result<UserId, ValidationError> {
    let raw = match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Null) | None => return Err(ValidationError::empty_field("id")),
        Some(_) => {
            return Err(ValidationError::invalid_format(
                "id",
                "expected a string or a number",
            ))
        }
    };
    UserId::new(raw).map_err(|_| ValidationError::empty_field("id"))
}

/// Parses a role list. Non-array input yields no roles; elements without a
/// string slug are skipped.
pub fn parse_roles(value: Option<&Value>) -> Vec<Role> {
    let Some(items) = as_array(value, "roles") else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let slug = item.get("slug")?.as_str()?;
            let name = item.get("name").and_then(Value::as_str).unwrap_or_default();
            Some(Role::new(slug, name))
        })
        .collect()
}

/// Parses the subscribed plan list. Non-array input yields no plans;
/// non-string or blank elements are skipped.
pub fn parse_plans(value: Option<&Value>) -> BTreeSet<PlanKey> {
    let Some(items) = as_array(value, "subscribedPlans") else {
        return BTreeSet::new();
    };

    items
        .iter()
        .filter_map(Value::as_str)
        .filter_map(|key| PlanKey::new(key).ok())
        .collect()
}

/// Parses the module map. Non-object input yields no modules. Every key is
/// kept; string tiers are taken as-is and other values are rendered as JSON
/// text so that presence is never lost.
pub fn parse_modules(value: Option<&Value>) -> ModuleMap {
    match value {
        Some(Value::Object(map)) => map
            .iter()
            .map(|(key, tier)| {
                let tier = match tier {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (key.clone(), tier)
            })
            .collect(),
        Some(Value::Null) | None => ModuleMap::new(),
        Some(other) => {
            warn!(kind = json_kind(other), "ignoring malformed modules field");
            ModuleMap::new()
        }
    }
}

fn as_array<'a>(value: Option<&'a Value>, field: &'static str) -> Option<&'a Vec<Value>> {
    match value {
        Some(Value::Array(items)) => Some(items),
        Some(Value::Null) | None => None,
        Some(other) => {
            warn!(field, kind = json_kind(other), "ignoring malformed session field");
            None
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
