use super::*;

#[test]
fn session_decodes_full_merchant_payload() {
    let raw = serde_json::json!({
        "user": { "id": "u1", "name": "Ada", "email": "ada@shop.test", "role": "merchant" },
        "merchant": { "id": "m1", "verified": true }
    });
    let session: Session = serde_json::from_value(raw).unwrap();
    assert_eq!(session.user.name.as_deref(), Some("Ada"));
    assert!(session.user.is_merchant());
    assert_eq!(session.merchant, Some(MerchantProfile { id: "m1".to_owned(), verified: true }));
}

#[test]
fn session_decodes_sparse_payload_with_defaults() {
    let raw = serde_json::json!({ "user": { "id": "u2" } });
    let session: Session = serde_json::from_value(raw).unwrap();
    assert_eq!(session.user.name, None);
    assert_eq!(session.user.email, None);
    assert_eq!(session.user.role, None);
    assert_eq!(session.merchant, None);
    assert!(!session.user.is_merchant());
}

#[test]
fn merchant_role_match_is_case_insensitive() {
    let user = User { id: "u".to_owned(), name: None, email: None, role: Some("Merchant".to_owned()) };
    assert!(user.is_merchant());
    let customer = User { role: Some("customer".to_owned()), ..user };
    assert!(!customer.is_merchant());
}

#[test]
fn login_request_serializes_credentials() {
    let body = serde_json::to_value(LoginRequest { email: "a@b.test", password: "pw" }).unwrap();
    assert_eq!(body, serde_json::json!({ "email": "a@b.test", "password": "pw" }));
}

#[test]
fn message_response_tolerates_missing_message() {
    let parsed: MessageResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(parsed, MessageResponse::default());
}
