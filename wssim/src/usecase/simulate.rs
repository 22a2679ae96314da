use axum::http::{Method, StatusCode};

use crate::domain::repository::{FixtureStore, StatusOverrideSource};
use crate::domain::types::{FixtureKey, RouteParams, SimulatedResponse};
use crate::error::SimulatorError;

// ── SimulateResponse ─────────────────────────────────────────────────────────

pub struct SimulateResponseUseCase<O: StatusOverrideSource, F: FixtureStore> {
    pub overrides: O,
    pub fixtures: F,
}

impl<O: StatusOverrideSource, F: FixtureStore> SimulateResponseUseCase<O, F> {
    /// Run the per-request state machine: forced status first, fixture
    /// resolution only when the effective status is 200. Fixture lookup
    /// failures become structured 400 responses; only unexpected faults
    /// surface as errors.
    pub async fn execute(
        &self,
        method: &Method,
        params: &RouteParams,
    ) -> Result<SimulatedResponse, SimulatorError> {
        let status = match self.overrides.read().await {
            None => StatusCode::OK,
            Some(code) => u16::try_from(code)
                .ok()
                .and_then(|c| StatusCode::from_u16(c).ok())
                .ok_or(SimulatorError::InvalidStatusOverride(code))?,
        };

        if status != StatusCode::OK {
            let text = status.canonical_reason().unwrap_or("");
            return Ok(SimulatedResponse::enveloped(status, text));
        }

        if params.function.is_empty() {
            return Ok(SimulatedResponse::empty(StatusCode::OK));
        }

        let key = FixtureKey::new(method, &params.function);
        match self.fixtures.load(&key).await {
            Ok(body) => Ok(SimulatedResponse {
                status: StatusCode::OK,
                body,
            }),
            Err(e @ (SimulatorError::FixtureNotFound | SimulatorError::FixtureUnreadable)) => Ok(
                SimulatedResponse::enveloped(StatusCode::BAD_REQUEST, &e.to_string()),
            ),
            Err(e) => Err(e),
        }
    }
}
