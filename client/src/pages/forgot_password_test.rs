use super::*;

#[test]
fn validate_reset_input_trims_whitespace() {
    assert_eq!(validate_reset_input("  owner@store.test\n"), Ok("owner@store.test".to_owned()));
}

#[test]
fn validate_reset_input_requires_email() {
    assert_eq!(validate_reset_input(""), Err(MISSING_EMAIL_MESSAGE));
    assert_eq!(validate_reset_input("   "), Err(MISSING_EMAIL_MESSAGE));
}

#[test]
fn validate_reset_input_rejects_malformed_email() {
    assert_eq!(validate_reset_input("owner.store.test"), Err(INVALID_EMAIL_MESSAGE));
}
