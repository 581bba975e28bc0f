use super::*;

#[test]
fn endpoint_for_joins_base_and_path() {
    assert_eq!(endpoint_for("/api", "/auth/me"), "/api/auth/me");
    assert_eq!(endpoint_for("https://auth.shop.test", "/auth/login"), "https://auth.shop.test/auth/login");
}

#[test]
fn endpoint_uses_configured_base() {
    assert!(endpoint("/auth/logout").starts_with(&api_base_url()));
    assert!(endpoint("/auth/logout").ends_with("/auth/logout"));
}

#[test]
fn google_sign_in_url_encodes_return_location() {
    assert_eq!(
        google_sign_in_url_for("/api", "https://shop.test/business/catalog/products?page=2"),
        "/api/auth/google?redirect=https%3A%2F%2Fshop.test%2Fbusiness%2Fcatalog%2Fproducts%3Fpage%3D2"
    );
}

#[test]
fn google_sign_in_url_keeps_unreserved_characters() {
    assert_eq!(
        google_sign_in_url_for("/api", "a-b_c.d~e"),
        "/api/auth/google?redirect=a-b_c.d~e"
    );
}

