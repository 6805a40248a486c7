//! The seam between the deterministic client and real I/O.
//!
//! # Design
//! `TaskClient` never touches the network; something has to execute the
//! `HttpRequest` values it builds. That something is a [`Transport`].
//! Production code uses [`UreqTransport`]; store unit tests implement the
//! trait with scripted in-memory responses.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes an `HttpRequest` and returns the raw `HttpResponse`.
///
/// Implementations must return non-2xx responses as data, not as errors —
/// status interpretation belongs to `TaskClient::parse_*`. `Err` is
/// reserved for requests that never completed.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Blocking transport backed by ureq.
///
/// ureq's automatic status-code-as-error behavior is disabled so 4xx/5xx
/// responses come back as data for the client to interpret.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let result = match (request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => self.agent.get(&request.path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&request.path).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&request.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&request.path).send_empty(),
            (HttpMethod::Put, Some(body)) => self
                .agent
                .put(&request.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => self.agent.put(&request.path).send_empty(),
        };

        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}
