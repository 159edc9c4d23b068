//! Request ID tagging, access logging, and panic recovery.

use std::any::Any;
use std::time::Instant;

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::Instrument;
use uuid::Uuid;

/// Extension type carrying the per-request correlation ID. It is attached
/// internally for log correlation and never surfaced to the caller.
#[derive(Clone, Debug)]
pub struct RequestId(pub Uuid);

/// Generates a request ID and wraps the request in a tracing span.
///
/// Applied as the outermost layer so the span covers all other middleware
/// and the handler. Emits one completion line per request with the status
/// and duration.
pub async fn request_id_layer(mut request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let client_ip = client_ip(&request);

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
        client_ip = client_ip.as_deref().unwrap_or("-"),
    );

    let start = Instant::now();
    request.extensions_mut().insert(RequestId(request_id));

    async move {
        let response = next.run(request).await;
        tracing::info!(
            status = response.status().as_u16(),
            duration_ms = start.elapsed().as_millis() as u64,
            "request completed"
        );
        response
    }
    .instrument(span)
    .await
}

/// Resolves the client address from proxy headers: the first hop of
/// `X-Forwarded-For`, else `X-Real-IP`.
fn client_ip(request: &Request) -> Option<String> {
    let headers = request.headers();

    if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        let first = forwarded.split(',').next().unwrap_or("").trim();
        if !first.is_empty() {
            return Some(first.to_string());
        }
    }

    headers
        .get("x-real-ip")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().to_string())
}

/// Converts a handler panic into a generic 500 instead of tearing down the
/// connection. Used with `CatchPanicLayer::custom`.
pub fn recover_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!(panic = %detail, "recovered panic while handling request");

    let status = StatusCode::INTERNAL_SERVER_ERROR;
    (status, status.canonical_reason().unwrap_or_default()).into_response()
}
