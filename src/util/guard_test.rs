use super::*;

#[test]
fn authenticated_visit_to_auth_redirects_to_dashboard() {
    assert_eq!(redirect_target(true, "/auth"), Some("/dashboard"));
}

#[test]
fn unauthenticated_visit_to_dashboard_redirects_to_auth() {
    assert_eq!(redirect_target(false, "/dashboard"), Some("/auth"));
}

#[test]
fn root_path_forwards_based_on_session() {
    assert_eq!(redirect_target(true, "/"), Some("/dashboard"));
    assert_eq!(redirect_target(false, "/"), Some("/auth"));
}

#[test]
fn matching_surfaces_are_served_in_place() {
    assert_eq!(redirect_target(true, "/dashboard"), None);
    assert_eq!(redirect_target(false, "/auth"), None);
}
