//! Route table for the application shell.
//!
//! The guard treats these paths opaquely; the table feeds the navigation
//! drawer and page titles. Anything not listed falls through to the
//! not-found page.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Navigation group a page is listed under in the drawer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    /// Login page; not listed.
    Public,
    Main,
    Setting,
    RolePermission,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub title: &'static str,
    pub section: Section,
}

const fn entry(path: &'static str, title: &'static str, section: Section) -> RouteEntry {
    RouteEntry { path, title, section }
}

pub const ROUTES: &[RouteEntry] = &[
    entry("/login", "Login", Section::Public),
    entry("/", "Dashboard", Section::Main),
    entry("/profile", "Profile", Section::Main),
    entry("/equipments", "Equipments", Section::Main),
    entry("/checksheets", "Checksheets", Section::Main),
    entry("/setting/activities", "Activities", Section::Setting),
    entry("/setting/suppliers", "Suppliers", Section::Setting),
    entry("/setting/locations", "Current Locations", Section::Setting),
    entry("/setting/categories", "Categories", Section::Setting),
    entry("/setting/sub-categories", "Sub Categories", Section::Setting),
    entry("/setting/users", "Users", Section::Setting),
    entry("/role-permission/roles", "Roles", Section::RolePermission),
    entry("/role-permission/permissions", "Permissions", Section::RolePermission),
];

/// Look up the entry for an exact path. A single trailing slash is ignored.
pub fn find(path: &str) -> Option<&'static RouteEntry> {
    let normalized = match path.strip_suffix('/') {
        Some(rest) if !rest.is_empty() => rest,
        _ => path,
    };
    ROUTES.iter().find(|r| r.path == normalized)
}

/// Entries shown in the navigation drawer for `section`.
pub fn in_section(section: Section) -> impl Iterator<Item = &'static RouteEntry> {
    ROUTES.iter().filter(move |r| r.section == section)
}

/// Page title for `path`, or the not-found title.
pub fn title_for(path: &str) -> &'static str {
    find(path).map_or("Not Found", |r| r.title)
}
