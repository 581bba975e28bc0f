//! Error type shared by the REST helpers in `net::api`.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a call to the auth API.
///
/// `Display` output is what pages show to the user.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Could not reach the server. Check your connection and try again.")]
    Network(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Unexpected response from the server.")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error, preferring the backend's own message when present.
    pub fn from_status(operation: &str, status: u16, backend_message: Option<String>) -> Self {
        let message = backend_message
            .map(|m| m.trim().to_owned())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| default_status_message(operation, status));
        Self::Status { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn default_status_message(operation: &str, status: u16) -> String {
    match status {
        401 => "Invalid email or password.".to_owned(),
        403 => "This account is not allowed to sign in here.".to_owned(),
        429 => "Too many attempts. Please wait and try again.".to_owned(),
        _ => format!("{operation} failed: {status}"),
    }
}
