use super::*;

#[test]
fn from_status_prefers_backend_message() {
    let err = ApiError::from_status("login", 400, Some("  Email is not registered ".to_owned()));
    assert_eq!(err.to_string(), "Email is not registered");
    assert_eq!(err.status(), Some(400));
}

#[test]
fn from_status_ignores_blank_backend_message() {
    let err = ApiError::from_status("login", 401, Some("   ".to_owned()));
    assert_eq!(err.to_string(), "Invalid email or password.");
}

#[test]
fn from_status_formats_operation_for_unmapped_status() {
    let err = ApiError::from_status("password reset", 503, None);
    assert_eq!(err.to_string(), "password reset failed: 503");
}

#[test]
fn throttling_has_friendly_message() {
    assert_eq!(
        ApiError::from_status("login", 429, None).to_string(),
        "Too many attempts. Please wait and try again."
    );
}

#[test]
fn non_status_errors_have_no_status_code() {
    assert_eq!(ApiError::Network("offline".to_owned()).status(), None);
    assert_eq!(ApiError::Unavailable.status(), None);
}
