//! Wire DTOs for the external auth API.
//!
//! DESIGN
//! ======
//! Optional fields default rather than fail so a sparse or partially rolled-out
//! backend response still decodes; authorization decisions derived from these
//! types treat anything missing as "no access".

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Role string the backend assigns to merchant accounts.
pub const MERCHANT_ROLE: &str = "merchant";

/// Authenticated account as reported by `/auth/me` and `/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl User {
    pub fn is_merchant(&self) -> bool {
        self.role
            .as_deref()
            .is_some_and(|role| role.eq_ignore_ascii_case(MERCHANT_ROLE))
    }
}

/// Merchant profile attached to a merchant session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantProfile {
    pub id: String,
    #[serde(default)]
    pub verified: bool,
}

/// Session payload returned by the auth API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    #[serde(default)]
    pub merchant: Option<MerchantProfile>,
}

/// Body for `POST /auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body for `POST /auth/forgot-password`.
#[derive(Debug, Serialize)]
pub struct PasswordResetRequest<'a> {
    pub email: &'a str,
}

/// Generic `{ "message": ... }` envelope used by confirmations and errors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
