//! REST helpers for the external auth API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, sending the session
//! cookie with every request.
//! Server-side (SSR): stubs returning `None`/`ApiError::Unavailable` since the
//! session cookie only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth failures
//! degrade into a login prompt or an inline message without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use super::error::ApiError;
use super::types::Session;
#[cfg(feature = "hydrate")]
use super::types::{LoginRequest, MessageResponse, PasswordResetRequest};
use crate::config::api_base_url;

/// Characters escaped in query-string values (RFC 3986 unreserved set kept).
pub(crate) const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Shown after a reset request when the backend sends no message of its own.
pub const RESET_REQUESTED_MESSAGE: &str = "If an account exists for that email, a reset link is on its way.";

fn endpoint_for(base: &str, path: &str) -> String {
    format!("{base}{path}")
}

fn endpoint(path: &str) -> String {
    endpoint_for(&api_base_url(), path)
}

fn google_sign_in_url_for(base: &str, return_to: &str) -> String {
    format!(
        "{}?redirect={}",
        endpoint_for(base, "/auth/google"),
        utf8_percent_encode(return_to, QUERY_VALUE)
    )
}

/// URL that starts Google OAuth sign-in; the backend sets the session cookie
/// and sends the browser back to `return_to` (an absolute URL).
pub fn google_sign_in_url(return_to: &str) -> String {
    google_sign_in_url_for(&api_base_url(), return_to)
}

#[cfg(feature = "hydrate")]
async fn status_error(resp: &gloo_net::http::Response, operation: &str) -> ApiError {
    let status = resp.status();
    let message = resp.json::<MessageResponse>().await.ok().and_then(|body| body.message);
    ApiError::from_status(operation, status, message)
}

/// Fetch the current session from `GET /auth/me`.
/// Returns `None` if not signed in, on any failure, or on the server.
pub async fn fetch_current_session() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint("/auth/me"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Session>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in with email and password via `POST /auth/login`.
///
/// # Errors
///
/// Returns `ApiError::Network` if the request cannot be sent,
/// `ApiError::Status` for a non-OK response, and `ApiError::Decode` if the
/// session payload is malformed.
pub async fn login(email: &str, password: &str) -> Result<Session, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/auth/login"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&LoginRequest { email, password })
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(&resp, "login").await);
        }
        resp.json::<Session>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// End the session by calling `POST /auth/logout`. Failures are only logged.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let result = gloo_net::http::Request::post(&endpoint("/auth/logout"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await;
        match result {
            Ok(resp) if !resp.ok() => log::warn!("logout returned status {}", resp.status()),
            Err(e) => log::warn!("logout request failed: {e}"),
            Ok(_) => {}
        }
    }
}

/// Ask the backend to email a password reset link via `POST /auth/forgot-password`.
///
/// Returns the confirmation text to show the user.
///
/// # Errors
///
/// Returns `ApiError::Network` if the request cannot be sent and
/// `ApiError::Status` for a non-OK response.
pub async fn request_password_reset(email: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/auth/forgot-password"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&PasswordResetRequest { email })
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(&resp, "password reset").await);
        }
        let body = resp.json::<MessageResponse>().await.unwrap_or_default();
        Ok(body.message.unwrap_or_else(|| RESET_REQUESTED_MESSAGE.to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(ApiError::Unavailable)
    }
}
