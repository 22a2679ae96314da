use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::domain::types::result_envelope;

/// Simulator error variants.
///
/// Fixture lookup failures are part of the simulated conversation and map
/// to structured 400 bodies; the rest are genuine faults and map to a
/// plain 500.
#[derive(Debug, thiserror::Error)]
pub enum SimulatorError {
    #[error("response file not found")]
    FixtureNotFound,
    #[error("failed to open response file")]
    FixtureUnreadable,
    #[error("forced status code {0} is not a representable HTTP status")]
    InvalidStatusOverride(i32),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for SimulatorError {
    fn into_response(self) -> Response {
        match &self {
            Self::FixtureNotFound | Self::FixtureUnreadable => (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                result_envelope(&self.to_string()),
            )
                .into_response(),
            Self::InvalidStatusOverride(code) => {
                tracing::error!(code = *code, "forced status code is not representable");
                internal_server_error()
            }
            Self::Internal(e) => {
                tracing::error!(error = %e, "internal error");
                internal_server_error()
            }
        }
    }
}

fn internal_server_error() -> Response {
    let text = StatusCode::INTERNAL_SERVER_ERROR
        .canonical_reason()
        .unwrap_or("Internal Server Error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        text,
    )
        .into_response()
}
