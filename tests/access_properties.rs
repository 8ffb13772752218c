//! Property tests for access predicates, navigation and the page gate.

use proptest::prelude::*;
use serde_json::{json, Map, Value};

use fleet_console::domain::access::{
    guard, AccessContext, AccessPolicy, CatalogTarget, ModuleKey, NavTarget, NavigationBuilder,
    PlanKey, RenderDecision, SessionState, NAV_CATALOG,
};

fn module_strategy() -> impl Strategy<Value = ModuleKey> {
    prop::sample::select(ModuleKey::ALL.to_vec())
}

fn modules_strategy() -> impl Strategy<Value = Vec<(ModuleKey, String)>> {
    prop::collection::vec((module_strategy(), "[a-z]{0,6}"), 0..10)
}

fn plans_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z][a-z-]{0,10}", 0..5)
}

fn session(plans: &[String], modules: &[(ModuleKey, String)], roles: &[String]) -> SessionState {
    let modules: Map<String, Value> = modules
        .iter()
        .map(|(key, tier)| (key.as_str().to_string(), Value::String(tier.clone())))
        .collect();
    let roles: Vec<Value> = roles
        .iter()
        .map(|slug| json!({ "slug": slug, "name": slug }))
        .collect();
    SessionState::from_payload(&json!({
        "id": "prop-user",
        "roles": roles,
        "subscribedPlans": plans,
        "modules": modules,
    }))
    .unwrap()
}

fn visible_names(state: &SessionState, policy: &AccessPolicy) -> Vec<&'static str> {
    let ctx = AccessContext::new(state, policy);
    NavigationBuilder::new()
        .build(&ctx)
        .entries()
        .iter()
        .map(|entry| entry.name)
        .collect()
}

proptest! {
    #[test]
    fn trial_sees_every_catalog_entry(
        mut plans in plans_strategy(),
        modules in modules_strategy(),
    ) {
        plans.push("free-trial".to_string());
        let policy = AccessPolicy::default();
        let state = session(&plans, &modules, &[]);
        let names = visible_names(&state, &policy);

        let expected: Vec<&str> = NAV_CATALOG.iter().map(|entry| entry.name).collect();
        prop_assert_eq!(names, expected);
    }

    #[test]
    fn non_trial_entry_visible_iff_module_present(
        plans in plans_strategy(),
        modules in modules_strategy(),
    ) {
        let plans: Vec<String> = plans.into_iter().filter(|p| p != "free-trial").collect();
        let policy = AccessPolicy::default();
        let state = session(&plans, &modules, &[]);
        let names = visible_names(&state, &policy);

        let expected: Vec<&str> = NAV_CATALOG
            .iter()
            .filter(|entry| modules.iter().any(|(key, _)| *key == entry.module))
            .map(|entry| entry.name)
            .collect();
        prop_assert_eq!(names, expected);
    }

    #[test]
    fn group_children_follow_their_own_keys(modules in modules_strategy()) {
        let policy = AccessPolicy::default();
        let state = session(&[], &modules, &[]);
        let ctx = AccessContext::new(&state, &policy);
        let tree = NavigationBuilder::new().build(&ctx);

        for entry in NAV_CATALOG {
            let CatalogTarget::Children(children) = entry.target else { continue };
            let Some(built) = tree.find(entry.name) else { continue };
            let NavTarget::Group(built_children) = &built.target else {
                prop_assert!(false, "group rendered as link");
                continue;
            };
            let expected: Vec<&str> = children
                .iter()
                .filter(|child| state.module_exists(child.module))
                .map(|child| child.name)
                .collect();
            let actual: Vec<&str> = built_children.iter().map(|c| c.name).collect();
            prop_assert_eq!(actual, expected);
        }
    }

    #[test]
    fn guard_matches_decision_table(
        plans in plans_strategy(),
        modules in modules_strategy(),
        module in module_strategy(),
    ) {
        let policy = AccessPolicy::default();
        let state = session(&plans, &modules, &[]);
        let ctx = AccessContext::new(&state, &policy);

        let expected = if state.module_exists(module) {
            RenderDecision::Proceed
        } else if state.plan_exists(&PlanKey::free_trial()) {
            RenderDecision::locked(module)
        } else {
            RenderDecision::ShowNotFound
        };
        prop_assert_eq!(guard(&ctx, module), expected);
    }

    #[test]
    fn super_admin_is_exact_slug_match(roles in prop::collection::vec("[a-z_]{1,12}", 0..4)) {
        let state = session(&[], &[], &roles);
        let expected = roles.iter().any(|slug| slug == "super_admin");
        prop_assert_eq!(state.is_super_admin(), expected);
    }

    #[test]
    fn predicates_are_idempotent(
        plans in plans_strategy(),
        modules in modules_strategy(),
        module in module_strategy(),
    ) {
        let state = session(&plans, &modules, &[]);
        let plan = PlanKey::free_trial();

        prop_assert_eq!(state.plan_exists(&plan), state.plan_exists(&plan));
        prop_assert_eq!(state.module_exists(module), state.module_exists(module));
        prop_assert_eq!(state.is_super_admin(), state.is_super_admin());
    }
}

#[test]
fn near_miss_admin_slugs_are_rejected() {
    for slug in ["Super_Admin", "superadmin", "super_admin ", "admin"] {
        let state = session(&[], &[], &[slug.to_string()]);
        assert!(!state.is_super_admin(), "{slug:?}");
    }
}
