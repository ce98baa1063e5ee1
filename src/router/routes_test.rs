use super::*;
use crate::router::guard::LOGIN_PATH;

#[test]
fn table_has_exactly_one_public_route_and_it_is_login() {
    let public: Vec<_> = in_section(Section::Public).collect();
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].path, LOGIN_PATH);
}

#[test]
fn paths_are_unique_and_rooted() {
    for (i, a) in ROUTES.iter().enumerate() {
        assert!(a.path.starts_with('/'), "{}", a.path);
        for b in &ROUTES[i + 1..] {
            assert_ne!(a.path, b.path);
        }
    }
}

#[test]
fn find_matches_exact_and_trailing_slash() {
    assert_eq!(find("/equipments").map(|r| r.title), Some("Equipments"));
    assert_eq!(find("/setting/users/").map(|r| r.title), Some("Users"));
    assert_eq!(find("/").map(|r| r.title), Some("Dashboard"));
}

#[test]
fn find_does_not_match_prefixes() {
    assert!(find("/setting").is_none());
    assert!(find("/equipments/12").is_none());
}

#[test]
fn title_for_unknown_path_is_not_found() {
    assert_eq!(title_for("/nowhere"), "Not Found");
    assert_eq!(title_for("/role-permission/roles"), "Roles");
}

#[test]
fn setting_section_lists_six_pages() {
    assert_eq!(in_section(Section::Setting).count(), 6);
    assert_eq!(in_section(Section::RolePermission).count(), 2);
}
