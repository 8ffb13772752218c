//! Navigation builder.
//!
//! Filters the static catalog through the access context in a single pass.
//! Groups are filtered on their own module key first; a surviving group
//! keeps its place even when none of its children survive.

use serde::Serialize;

use super::catalog::{
    path_matches, CatalogEntry, CatalogTarget, ADMIN_GROUP_ICON, ADMIN_GROUP_NAME,
    ADMIN_PLANS_ICON, ADMIN_PLANS_NAME, ADMIN_PLANS_PATH, NAV_CATALOG,
};
use super::{AccessContext, ModuleKey};

/// One rendered navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub name: &'static str,
    pub icon: &'static str,
    #[serde(flatten)]
    pub target: NavTarget,
}

/// Link target or nested entries, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum NavTarget {
    #[serde(rename = "path")]
    Path(&'static str),
    #[serde(rename = "children")]
    Group(Vec<NavEntry>),
}

impl NavEntry {
    pub fn link(name: &'static str, icon: &'static str, path: &'static str) -> Self {
        Self {
            name,
            icon,
            target: NavTarget::Path(path),
        }
    }

    pub fn group(name: &'static str, icon: &'static str, children: Vec<NavEntry>) -> Self {
        Self {
            name,
            icon,
            target: NavTarget::Group(children),
        }
    }

    pub fn path(&self) -> Option<&'static str> {
        match self.target {
            NavTarget::Path(path) => Some(path),
            NavTarget::Group(_) => None,
        }
    }

    pub fn children(&self) -> &[NavEntry] {
        match &self.target {
            NavTarget::Path(_) => &[],
            NavTarget::Group(children) => children,
        }
    }
}

/// The filtered, ordered navigation for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NavTree {
    entries: Vec<NavEntry>,
}

impl NavTree {
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&NavEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Every reachable link path, top-level and nested, in display order.
    pub fn paths(&self) -> Vec<&'static str> {
        self.entries
            .iter()
            .flat_map(|entry| match &entry.target {
                NavTarget::Path(path) => vec![*path],
                NavTarget::Group(children) => children.iter().filter_map(NavEntry::path).collect(),
            })
            .collect()
    }

    /// Name of the group to expand for the active route, if any.
    pub fn expanded_group(&self, active_path: &str) -> Option<&'static str> {
        self.entries.iter().find_map(|entry| {
            entry
                .children()
                .iter()
                .filter_map(NavEntry::path)
                .any(|path| path_matches(active_path, path))
                .then_some(entry.name)
        })
    }
}

/// Builds a [`NavTree`] from a catalog.
#[derive(Debug, Clone, Copy)]
pub struct NavigationBuilder {
    catalog: &'static [CatalogEntry],
}

impl NavigationBuilder {
    pub fn new() -> Self {
        Self {
            catalog: NAV_CATALOG,
        }
    }

    pub fn build(&self, ctx: &AccessContext<'_>) -> NavTree {
        let mut entries: Vec<NavEntry> = self
            .catalog
            .iter()
            .filter(|entry| ctx.can_see(entry.module))
            .map(|entry| match entry.target {
                CatalogTarget::Path(path) => NavEntry::link(entry.name, entry.icon, path),
                CatalogTarget::Children(children) => {
                    let visible = children
                        .iter()
                        .filter(|c| ctx.can_see(c.module))
                        .map(|c| NavEntry::link(c.name, c.icon, c.path))
                        .collect();
                    NavEntry::group(entry.name, entry.icon, visible)
                }
            })
            .collect();

        if ctx.is_super_admin() {
            entries.push(NavEntry::group(
                ADMIN_GROUP_NAME,
                ADMIN_GROUP_ICON,
                vec![NavEntry::link(ADMIN_PLANS_NAME, ADMIN_PLANS_ICON, ADMIN_PLANS_PATH)],
            ));
        }

        NavTree { entries }
    }
}

impl NavigationBuilder {
    /// Modules whose entries [`build`](Self::build) would list, in display
    /// order. A child only counts when its group is listed too.
    pub fn visible_modules(&self, ctx: &AccessContext<'_>) -> Vec<ModuleKey> {
        self.catalog
            .iter()
            .filter(|entry| ctx.can_see(entry.module))
            .flat_map(|entry| {
                let children = match entry.target {
                    CatalogTarget::Path(_) => &[][..],
                    CatalogTarget::Children(children) => children,
                };
                std::iter::once(entry.module).chain(
                    children
                        .iter()
                        .filter(|c| ctx.can_see(c.module))
                        .map(|c| c.module),
                )
            })
            .collect()
    }
}

impl Default for NavigationBuilder {
    fn default() -> Self {
        Self::new()
    }
}
