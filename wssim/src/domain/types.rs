use axum::http::{Method, StatusCode};
use bytes::Bytes;

/// Path parameters bound by the dispatcher for one request.
///
/// `function` names the simulated endpoint; `id` is extracted when present
/// but does not influence fixture resolution (reserved).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteParams {
    pub function: String,
    pub id: Option<String>,
}

/// Lookup key for a canned response: canonical method verb plus function
/// name, both case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FixtureKey {
    pub method: String,
    pub function: String,
}

impl FixtureKey {
    pub fn new(method: &Method, function: &str) -> Self {
        Self {
            method: method.as_str().to_owned(),
            function: function.to_owned(),
        }
    }
}

/// Status and body resolved by the simulation state machine.
///
/// Fixture bodies pass through verbatim; everything the simulator says in
/// its own voice goes through [`result_envelope`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl SimulatedResponse {
    pub fn empty(status: StatusCode) -> Self {
        Self {
            status,
            body: Bytes::new(),
        }
    }

    pub fn enveloped(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            body: Bytes::from(result_envelope(message)),
        }
    }
}

/// JSON envelope for simulator-generated messages. The byte layout
/// (single space after the colon) is part of the wire contract.
pub fn result_envelope(message: &str) -> String {
    format!(r#"{{"result": "{message}"}}"#)
}
