use std::any::Any;
use std::time::Instant;

use axum::body::Body;
use axum::extract::Request;
use axum::http::{HeaderName, Method, StatusCode, header};
use axum::middleware::Next;
use axum::response::Response;
use bytes::Bytes;
use http_body_util::Full;
use tower_http::request_id::{MakeRequestId, RequestId, SetRequestIdLayer};
use tracing::{error, info, warn};
use uuid::Uuid;

// ── Request id ───────────────────────────────────────────────────────────────

pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone, Default)]
pub struct MakeUuidRequestId;

impl MakeRequestId for MakeUuidRequestId {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        Some(RequestId::new(id.parse().unwrap()))
    }
}

/// Stamp every incoming request with a fresh UUID so log lines can be
/// correlated per request.
pub fn request_id_layer() -> SetRequestIdLayer<MakeUuidRequestId> {
    SetRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER), MakeUuidRequestId)
}

// ── Request logging ──────────────────────────────────────────────────────────

/// Log method, full URL and elapsed time once the inner service has
/// answered; for POST/PUT requests also log the raw body.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_owned();
    let started = Instant::now();

    let (request, captured) = if method == Method::POST || method == Method::PUT {
        buffer_body(request).await
    } else {
        (request, None)
    };

    let response = next.run(request).await;

    info!(
        method = %method,
        uri = %uri,
        elapsed = ?started.elapsed(),
        request_id = %request_id,
        "request"
    );
    if let Some(body) = captured {
        info!(body = %String::from_utf8_lossy(&body), "request body");
    }
    response
}

/// Best-effort body capture; a failed read is logged and the request
/// continues with an empty body.
async fn buffer_body(request: Request) -> (Request, Option<Bytes>) {
    let (parts, body) = request.into_parts();
    match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            let request = Request::from_parts(parts, Body::from(bytes.clone()));
            (request, Some(bytes))
        }
        Err(e) => {
            warn!(error = %e, "failed to read request body");
            (Request::from_parts(parts, Body::empty()), None)
        }
    }
}

// ── Panic recovery ───────────────────────────────────────────────────────────

/// Turn a panic below the boundary into a plain 500; the serving loop
/// keeps running.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> axum::http::Response<Full<Bytes>> {
    let cause = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown cause"
    };
    error!(cause = %cause, "internal error");

    let text = StatusCode::INTERNAL_SERVER_ERROR
        .canonical_reason()
        .unwrap_or("Internal Server Error");
    axum::http::Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(Full::from(Bytes::from(text)))
        .unwrap()
}
