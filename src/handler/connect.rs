use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

use crate::error::ConnectError;

use super::AppState;
use super::auth;

/// Connection-info handler: GET /
///
/// Validates `Authorization: Bearer <token>` against the configured secret
/// and responds with a fixed body on success. The database URL is checked
/// for presence but deliberately never written to the response.
pub async fn connect_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    match authorize(&state, &headers) {
        Ok(body) => (StatusCode::OK, body).into_response(),
        Err(err) => {
            if err.is_misconfiguration() {
                error!("{err}");
            } else {
                warn!("{err}");
            }
            err.into_response()
        }
    }
}

/// Short-circuit pipeline; the first failing step decides the response.
/// Secrets are read per call, so a changed secret applies to the next request.
fn authorize(state: &AppState, headers: &HeaderMap) -> Result<&'static str, ConnectError> {
    let secret = state
        .secrets
        .secret()
        .ok_or(ConnectError::SecretNotConfigured)?;

    let token = auth::bearer_token(headers).ok_or(ConnectError::InvalidAuthorization)?;

    if !auth::token_matches(token, &secret) {
        return Err(ConnectError::AuthorizationFailed);
    }

    state
        .secrets
        .database_url()
        .ok_or(ConnectError::DatabaseUrlNotAvailable)?;

    Ok("hello world")
}
