use super::*;

#[test]
fn normalize_base_url_strips_trailing_slashes() {
    assert_eq!(normalize_base_url("https://api.example.com/v1/"), "https://api.example.com/v1");
    assert_eq!(normalize_base_url("/api//"), "/api");
}

#[test]
fn normalize_base_url_falls_back_when_blank() {
    assert_eq!(normalize_base_url(""), DEFAULT_API_BASE_URL);
    assert_eq!(normalize_base_url("  / "), DEFAULT_API_BASE_URL);
}

#[test]
fn landing_route_lives_under_business_root() {
    assert!(DEFAULT_LANDING_ROUTE.starts_with(BUSINESS_ROOT));
}
