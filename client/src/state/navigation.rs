//! Business console navigation model: route table, active-route resolution,
//! and section expansion state.
//!
//! DESIGN
//! ======
//! The route table is static data. Highlighting is a pure function of the
//! current path and is recomputed on every render, so there is no cached
//! "active item" that could drift from the router. The only mutable piece is
//! `ExpansionState`, which the shell owns for its lifetime.
//!
//! Matching rules:
//! - a top-level item with a path is active only on an exact path match;
//! - a sub-item is active when the current path starts with its path, so
//!   deeper routes under it keep it highlighted;
//! - a section is active when any of its sub-items is.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use std::collections::HashMap;

/// Known navigation icons. Resolved to markup by `components::nav_icon`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavIcon {
    Dashboard,
    Catalog,
    Products,
    Categories,
    Attributes,
    Orders,
    Inventory,
    Customers,
    Payments,
    Promotions,
    Reviews,
    Reports,
    Support,
    Settings,
}

/// Where a navigation entry leads: a single route, or a nested list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    Path(&'static str),
    Submenu(&'static [NavItem]),
}

/// One entry in the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    /// Display label; unique across the table and used as the expansion key.
    pub name: &'static str,
    pub icon: NavIcon,
    pub target: NavTarget,
}

impl NavItem {
    const fn link(name: &'static str, icon: NavIcon, path: &'static str) -> Self {
        Self { name, icon, target: NavTarget::Path(path) }
    }

    const fn section(name: &'static str, icon: NavIcon, items: &'static [NavItem]) -> Self {
        Self { name, icon, target: NavTarget::Submenu(items) }
    }

    /// Route path for link entries, `None` for sections.
    pub fn path(&self) -> Option<&'static str> {
        match self.target {
            NavTarget::Path(path) => Some(path),
            NavTarget::Submenu(_) => None,
        }
    }

    /// Sub-items for sections, empty for link entries.
    pub fn sub_items(&self) -> &'static [NavItem] {
        match self.target {
            NavTarget::Path(_) => &[],
            NavTarget::Submenu(items) => items,
        }
    }

    pub fn is_section(&self) -> bool {
        matches!(self.target, NavTarget::Submenu(_))
    }
}

const CATALOG_ITEMS: &[NavItem] = &[
    NavItem::link("Products", NavIcon::Products, "/business/catalog/products"),
    NavItem::link("Categories", NavIcon::Categories, "/business/catalog/categories"),
    NavItem::link("Attributes", NavIcon::Attributes, "/business/catalog/attributes"),
];

/// Sidebar route table for the merchant console, in display order.
pub const BUSINESS_NAVIGATION: &[NavItem] = &[
    NavItem::link("Dashboard", NavIcon::Dashboard, "/business/dashboard"),
    NavItem::section("Catalog", NavIcon::Catalog, CATALOG_ITEMS),
    NavItem::link("Orders", NavIcon::Orders, "/business/orders"),
    NavItem::link("Inventory", NavIcon::Inventory, "/business/inventory"),
    NavItem::link("Customers", NavIcon::Customers, "/business/customers"),
    NavItem::link("Payments", NavIcon::Payments, "/business/payments"),
    NavItem::link("Promotions", NavIcon::Promotions, "/business/promotions"),
    NavItem::link("Reviews", NavIcon::Reviews, "/business/reviews"),
    NavItem::link("Reports", NavIcon::Reports, "/business/reports"),
    NavItem::link("Support", NavIcon::Support, "/business/support"),
    NavItem::link("Settings", NavIcon::Settings, "/business/settings"),
];

/// Section expanded when the shell first mounts.
pub const INITIALLY_EXPANDED: &str = "Catalog";

/// Whether a top-level entry should be highlighted for `route`.
pub fn is_item_active(item: &NavItem, route: &str) -> bool {
    match item.target {
        NavTarget::Path(path) => route == path,
        NavTarget::Submenu(items) => items.iter().any(|sub| is_sub_item_active(sub, route)),
    }
}

/// Whether a nested entry should be highlighted for `route` (prefix match).
pub fn is_sub_item_active(item: &NavItem, route: &str) -> bool {
    match item.target {
        NavTarget::Path(path) => route.starts_with(path),
        NavTarget::Submenu(items) => items.iter().any(|sub| is_sub_item_active(sub, route)),
    }
}

/// Names of all sections that are active for `route`.
pub fn active_sections<'a>(items: &'a [NavItem], route: &'a str) -> impl Iterator<Item = &'static str> + 'a {
    items
        .iter()
        .filter(move |item| item.is_section() && is_item_active(item, route))
        .map(|item| item.name)
}

/// Label of the entry that best describes `route`, for the top bar title.
///
/// Prefers the highlighted sub-item over its section.
pub fn page_title(items: &[NavItem], route: &str) -> Option<&'static str> {
    items.iter().find_map(|item| match item.target {
        NavTarget::Path(path) => (route == path).then_some(item.name),
        NavTarget::Submenu(subs) => subs
            .iter()
            .find(|sub| is_sub_item_active(sub, route))
            .map(|sub| sub.name),
    })
}

/// Which sidebar sections are expanded, keyed by section name.
///
/// Missing entries read as collapsed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpansionState {
    entries: HashMap<String, bool>,
}

impl ExpansionState {
    /// State with `INITIALLY_EXPANDED` open and everything else collapsed.
    pub fn initial() -> Self {
        let mut state = Self::default();
        state.entries.insert(INITIALLY_EXPANDED.to_owned(), true);
        state
    }

    pub fn is_expanded(&self, section: &str) -> bool {
        self.entries.get(section).copied().unwrap_or(false)
    }

    /// Flip a section's expansion, independent of the current route.
    pub fn toggle(&mut self, section: &str) {
        let next = !self.is_expanded(section);
        self.entries.insert(section.to_owned(), next);
    }

    /// Force every section that is active for `route` open.
    ///
    /// Only ever sets entries to `true`; a section the route no longer
    /// matches keeps whatever state it had.
    pub fn auto_expand(&mut self, items: &[NavItem], route: &str) {
        for name in active_sections(items, route) {
            self.entries.insert(name.to_owned(), true);
        }
    }
}
