//! Feature module keys.
//!
//! The backend identifies feature areas by hierarchical string keys
//! (`parent` or `parent_child`). This module closes that namespace into an
//! enum so the navigation catalog and page routes cannot reference a key
//! that does not exist.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// A feature area, or a sub-feature nested under one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleKey {
    Dashboard,
    Customers,
    Fleet,
    FleetVehicles,
    FleetTracking,
    FleetDrivers,
    Maintenance,
    MaintenanceSchedules,
    MaintenanceWorkOrders,
    Dispatch,
    Billing,
    BillingInvoices,
    BillingPayments,
    Insurance,
    InsurancePolicies,
    InsuranceClaims,
    Devices,
    Reports,
}

static BY_KEY: Lazy<HashMap<&'static str, ModuleKey>> = Lazy::new(|| {
    ModuleKey::ALL
        .iter()
        .map(|module| (module.as_str(), *module))
        .collect()
});

impl ModuleKey {
    /// Every supported module, parents before their children.
    pub const ALL: [ModuleKey; 18] = [
        ModuleKey::Dashboard,
        ModuleKey::Customers,
        ModuleKey::Fleet,
        ModuleKey::FleetVehicles,
        ModuleKey::FleetTracking,
        ModuleKey::FleetDrivers,
        ModuleKey::Maintenance,
        ModuleKey::MaintenanceSchedules,
        ModuleKey::MaintenanceWorkOrders,
        ModuleKey::Dispatch,
        ModuleKey::Billing,
        ModuleKey::BillingInvoices,
        ModuleKey::BillingPayments,
        ModuleKey::Insurance,
        ModuleKey::InsurancePolicies,
        ModuleKey::InsuranceClaims,
        ModuleKey::Devices,
        ModuleKey::Reports,
    ];

    /// The key as it appears in the session's module map.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleKey::Dashboard => "dashboard",
            ModuleKey::Customers => "customers",
            ModuleKey::Fleet => "fleet",
            ModuleKey::FleetVehicles => "fleet_vehicles",
            ModuleKey::FleetTracking => "fleet_tracking",
            ModuleKey::FleetDrivers => "fleet_drivers",
            ModuleKey::Maintenance => "maintenance",
            ModuleKey::MaintenanceSchedules => "maintenance_schedules",
            ModuleKey::MaintenanceWorkOrders => "maintenance_work_orders",
            ModuleKey::Dispatch => "dispatch",
            ModuleKey::Billing => "billing",
            ModuleKey::BillingInvoices => "billing_invoices",
            ModuleKey::BillingPayments => "billing_payments",
            ModuleKey::Insurance => "insurance",
            ModuleKey::InsurancePolicies => "insurance_policies",
            ModuleKey::InsuranceClaims => "insurance_claims",
            ModuleKey::Devices => "devices",
            ModuleKey::Reports => "reports",
        }
    }

    /// Human-readable feature name, shown on the locked-feature upsell.
    pub fn display_name(&self) -> &'static str {
        match self {
            ModuleKey::Dashboard => "Dashboard",
            ModuleKey::Customers => "Customers",
            ModuleKey::Fleet => "Fleet",
            ModuleKey::FleetVehicles => "Vehicles",
            ModuleKey::FleetTracking => "Live Tracking",
            ModuleKey::FleetDrivers => "Drivers",
            ModuleKey::Maintenance => "Maintenance",
            ModuleKey::MaintenanceSchedules => "Service Schedules",
            ModuleKey::MaintenanceWorkOrders => "Work Orders",
            ModuleKey::Dispatch => "Dispatch",
            ModuleKey::Billing => "Billing",
            ModuleKey::BillingInvoices => "Invoices",
            ModuleKey::BillingPayments => "Payments",
            ModuleKey::Insurance => "Insurance",
            ModuleKey::InsurancePolicies => "Policies",
            ModuleKey::InsuranceClaims => "Claims",
            ModuleKey::Devices => "Telemetry Devices",
            ModuleKey::Reports => "Reports",
        }
    }

    /// The feature area a sub-feature belongs to.
    ///
    /// Derived from the enum rather than by splitting the key, since child
    /// names may themselves contain underscores (`maintenance_work_orders`).
    pub fn parent(&self) -> Option<ModuleKey> {
        match self {
            ModuleKey::FleetVehicles | ModuleKey::FleetTracking | ModuleKey::FleetDrivers => {
                Some(ModuleKey::Fleet)
            }
            ModuleKey::MaintenanceSchedules | ModuleKey::MaintenanceWorkOrders => {
                Some(ModuleKey::Maintenance)
            }
            ModuleKey::BillingInvoices | ModuleKey::BillingPayments => Some(ModuleKey::Billing),
            ModuleKey::InsurancePolicies | ModuleKey::InsuranceClaims => {
                Some(ModuleKey::Insurance)
            }
            _ => None,
        }
    }

    /// Looks up a module by its string key. Returns `None` for keys this
    /// build does not know about.
    pub fn lookup(key: &str) -> Option<ModuleKey> {
        BY_KEY.get(key).copied()
    }
}

impl fmt::Display for ModuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ModuleKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModuleKey::lookup(s)
            .ok_or_else(|| ValidationError::invalid_format("module", format!("unknown module key '{}'", s)))
    }
}
