use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectError {
    /// The expected secret is not configured in the environment
    SecretNotConfigured,
    /// Authorization header missing or not `Bearer `-prefixed
    InvalidAuthorization,
    /// Presented token does not match the configured secret
    AuthorizationFailed,
    /// The guarded database URL is not configured
    DatabaseUrlNotAvailable,
}

impl ConnectError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::SecretNotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidAuthorization => StatusCode::BAD_REQUEST,
            Self::AuthorizationFailed => StatusCode::UNAUTHORIZED,
            Self::DatabaseUrlNotAvailable => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// True for operator-facing misconfiguration, false for client errors.
    pub fn is_misconfiguration(&self) -> bool {
        matches!(self, Self::SecretNotConfigured | Self::DatabaseUrlNotAvailable)
    }
}

impl fmt::Display for ConnectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SecretNotConfigured => write!(f, "secret key not configured"),
            Self::InvalidAuthorization => write!(f, "invalid authorization"),
            Self::AuthorizationFailed => write!(f, "authorization failed"),
            Self::DatabaseUrlNotAvailable => write!(f, "database url not available"),
        }
    }
}

impl std::error::Error for ConnectError {}

/// Responses carry only the generic status text, never internal detail.
impl IntoResponse for ConnectError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = status.canonical_reason().unwrap_or_default();
        (status, body).into_response()
    }
}
