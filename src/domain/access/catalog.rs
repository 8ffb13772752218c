//! Static navigation catalog and page-route table.
//!
//! Both tables are plain data. Access filtering lives in
//! [`super::navigation`] and [`super::page_gate`].

use super::ModuleKey;

/// A top-level candidate navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub icon: &'static str,
    /// Module gating the entry itself (the group, for grouped entries).
    pub module: ModuleKey,
    pub target: CatalogTarget,
}

/// Where a catalog entry leads. A group never carries its own path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogTarget {
    Path(&'static str),
    Children(&'static [CatalogChild]),
}

/// A leaf inside a navigation group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogChild {
    pub name: &'static str,
    pub icon: &'static str,
    pub module: ModuleKey,
    pub path: &'static str,
}

const fn leaf(name: &'static str, icon: &'static str, module: ModuleKey, path: &'static str) -> CatalogEntry {
    CatalogEntry {
        name,
        icon,
        module,
        target: CatalogTarget::Path(path),
    }
}

const fn group(
    name: &'static str,
    icon: &'static str,
    module: ModuleKey,
    children: &'static [CatalogChild],
) -> CatalogEntry {
    CatalogEntry {
        name,
        icon,
        module,
        target: CatalogTarget::Children(children),
    }
}

const fn child(name: &'static str, icon: &'static str, module: ModuleKey, path: &'static str) -> CatalogChild {
    CatalogChild {
        name,
        icon,
        module,
        path,
    }
}

const FLEET_CHILDREN: &[CatalogChild] = &[
    child("Vehicles", "car", ModuleKey::FleetVehicles, "/fleet/vehicles"),
    child("Live Tracking", "map-pin", ModuleKey::FleetTracking, "/fleet/tracking"),
    child("Drivers", "id-card", ModuleKey::FleetDrivers, "/fleet/drivers"),
];

const MAINTENANCE_CHILDREN: &[CatalogChild] = &[
    child("Service Schedules", "calendar", ModuleKey::MaintenanceSchedules, "/maintenance/schedules"),
    child("Work Orders", "clipboard", ModuleKey::MaintenanceWorkOrders, "/maintenance/work-orders"),
];

const BILLING_CHILDREN: &[CatalogChild] = &[
    child("Invoices", "file-text", ModuleKey::BillingInvoices, "/billing/invoices"),
    child("Payments", "credit-card", ModuleKey::BillingPayments, "/billing/payments"),
];

const INSURANCE_CHILDREN: &[CatalogChild] = &[
    child("Policies", "file-shield", ModuleKey::InsurancePolicies, "/insurance/policies"),
    child("Claims", "alert-triangle", ModuleKey::InsuranceClaims, "/insurance/claims"),
];

/// Sidebar catalog, in display order.
pub const NAV_CATALOG: &[CatalogEntry] = &[
    leaf("Dashboard", "gauge", ModuleKey::Dashboard, "/dashboard"),
    leaf("Customers", "users", ModuleKey::Customers, "/customers"),
    group("Fleet", "truck", ModuleKey::Fleet, FLEET_CHILDREN),
    group("Maintenance", "wrench", ModuleKey::Maintenance, MAINTENANCE_CHILDREN),
    leaf("Dispatch", "route", ModuleKey::Dispatch, "/dispatch"),
    group("Billing", "receipt", ModuleKey::Billing, BILLING_CHILDREN),
    group("Insurance", "shield-check", ModuleKey::Insurance, INSURANCE_CHILDREN),
    leaf("Telemetry Devices", "cpu", ModuleKey::Devices, "/devices"),
    leaf("Reports", "bar-chart", ModuleKey::Reports, "/reports"),
];

/// Administration branch shown only to super-admins.
pub const ADMIN_GROUP_NAME: &str = "Administration";
pub const ADMIN_GROUP_ICON: &str = "shield";
pub const ADMIN_PLANS_NAME: &str = "Subscription Plans";
pub const ADMIN_PLANS_ICON: &str = "layers";
pub const ADMIN_PLANS_PATH: &str = "/admin/plans";

/// What a routed page requires before rendering its body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAccess {
    Module(ModuleKey),
    SuperAdmin,
}

/// A routed page and its requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRoute {
    pub path: &'static str,
    pub access: PageAccess,
}

const fn page(path: &'static str, module: ModuleKey) -> PageRoute {
    PageRoute {
        path,
        access: PageAccess::Module(module),
    }
}

/// Routed pages. Lookup is by longest path-segment prefix, so detail routes
/// such as `/fleet/vehicles/42` resolve to their list page.
pub const PAGE_ROUTES: &[PageRoute] = &[
    page("/dashboard", ModuleKey::Dashboard),
    page("/customers", ModuleKey::Customers),
    page("/fleet/vehicles", ModuleKey::FleetVehicles),
    page("/fleet/tracking", ModuleKey::FleetTracking),
    page("/fleet/drivers", ModuleKey::FleetDrivers),
    page("/maintenance/schedules", ModuleKey::MaintenanceSchedules),
    page("/maintenance/work-orders", ModuleKey::MaintenanceWorkOrders),
    page("/dispatch", ModuleKey::Dispatch),
    page("/billing/invoices", ModuleKey::BillingInvoices),
    page("/billing/payments", ModuleKey::BillingPayments),
    page("/insurance/policies", ModuleKey::InsurancePolicies),
    page("/insurance/claims", ModuleKey::InsuranceClaims),
    page("/devices", ModuleKey::Devices),
    page("/reports", ModuleKey::Reports),
    PageRoute {
        path: ADMIN_PLANS_PATH,
        access: PageAccess::SuperAdmin,
    },
];

/// True when `path` equals `prefix` or continues it at a `/` boundary.
pub fn path_matches(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'),
        None => false,
    }
}

/// Finds the page route owning `path`.
pub fn route_for_path(path: &str) -> Option<&'static PageRoute> {
    PAGE_ROUTES
        .iter()
        .filter(|route| path_matches(path, route.path))
        .max_by_key(|route| route.path.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn child_modules_belong_to_their_group() {
        for entry in NAV_CATALOG {
            if let CatalogTarget::Children(children) = entry.target {
                assert!(!children.is_empty(), "{} has no children", entry.name);
                for c in children {
                    assert_eq!(c.module.parent(), Some(entry.module), "{}", c.name);
                }
            }
        }
    }

    #[test]
    fn every_nav_path_is_a_routed_page() {
        for entry in NAV_CATALOG {
            let paths: Vec<&str> = match entry.target {
                CatalogTarget::Path(p) => vec![p],
                CatalogTarget::Children(children) => children.iter().map(|c| c.path).collect(),
            };
            for p in paths {
                assert_eq!(route_for_path(p).map(|r| r.path), Some(p));
            }
        }
    }

    #[test]
    fn route_paths_are_unique() {
        let paths: HashSet<&str> = PAGE_ROUTES.iter().map(|r| r.path).collect();
        assert_eq!(paths.len(), PAGE_ROUTES.len());
    }

    #[test]
    fn detail_route_resolves_to_list_page() {
        let route = route_for_path("/fleet/vehicles/42/edit").unwrap();
        assert_eq!(route.access, PageAccess::Module(ModuleKey::FleetVehicles));
    }

    #[test]
    fn prefix_must_end_at_segment_boundary() {
        assert!(route_for_path("/dispatcher").is_none());
        assert!(route_for_path("/dispatch?tab=open").is_some());
    }

    #[test]
    fn unknown_path_has_no_route() {
        assert!(route_for_path("/nowhere").is_none());
        assert!(route_for_path("/").is_none());
    }

    #[test]
    fn admin_plans_requires_super_admin() {
        assert_eq!(
            route_for_path(ADMIN_PLANS_PATH).map(|r| r.access),
            Some(PageAccess::SuperAdmin)
        );
    }
}
