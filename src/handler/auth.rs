use axum::http::HeaderMap;
use subtle::ConstantTimeEq;

pub const BEARER_PREFIX: &str = "Bearer ";

/// Extracts the token from an `Authorization: Bearer <token>` header.
/// Returns None if the header is missing, non-ASCII, or carries a different
/// scheme. The prefix match is case-sensitive.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix(BEARER_PREFIX))
}

/// Compares the presented token to the expected secret in constant time.
pub fn token_matches(token: &str, secret: &str) -> bool {
    token.as_bytes().ct_eq(secret.as_bytes()).into()
}
