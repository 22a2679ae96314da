use anyhow::Context as _;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, Method, header};
use axum::response::Response;

use crate::domain::types::RouteParams;
use crate::error::SimulatorError;
use crate::negotiate;
use crate::state::AppState;
use crate::usecase::simulate::SimulateResponseUseCase;

// ── GET|HEAD|POST|PUT /api/{function} ────────────────────────────────────────

pub async fn simulate_function(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    Path(function): Path<String>,
) -> Result<Response, SimulatorError> {
    let params = RouteParams { function, id: None };
    respond(&state, method, &headers, params).await
}

// ── GET|POST|PUT|DELETE /api/{function}/{id} ─────────────────────────────────

pub async fn simulate_function_with_id(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    Path((function, id)): Path<(String, String)>,
) -> Result<Response, SimulatorError> {
    let params = RouteParams {
        function,
        id: Some(id),
    };
    respond(&state, method, &headers, params).await
}

async fn respond(
    state: &AppState,
    method: Method,
    headers: &HeaderMap,
    params: RouteParams,
) -> Result<Response, SimulatorError> {
    let content_type = negotiate::response_content_type(headers);
    tracing::debug!(
        method = %method,
        function = %params.function,
        id = ?params.id,
        content_type = %content_type,
        "simulating"
    );

    let usecase = SimulateResponseUseCase {
        overrides: state.override_source(),
        fixtures: state.fixture_store(),
    };
    let simulated = usecase.execute(&method, &params).await?;

    // Header before status before body.
    let response = Response::builder()
        .header(header::CONTENT_TYPE, content_type)
        .status(simulated.status)
        .body(Body::from(simulated.body))
        .context("assemble simulated response")?;
    Ok(response)
}
