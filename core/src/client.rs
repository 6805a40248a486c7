//! Stateless HTTP request builder and response parser for the task API.
//!
//! # Design
//! `TaskClient` holds only a `base_url` and carries no mutable state
//! between calls. Each CRUD operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`; a transport executes the round-trip in between.
//!
//! The upstream server answers every successful operation with 200 — POST
//! included — and DELETE returns the removed task as its body, which the
//! client ignores.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTask, Task, UpdateTask};

/// Synchronous, stateless client for the task API.
#[derive(Debug, Clone)]
pub struct TaskClient {
    base_url: String,
}

impl TaskClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_tasks(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/tasks", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_task(&self, input: &CreateTask) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/tasks", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_update_task(&self, id: i64, input: &UpdateTask) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/tasks/{id}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_task(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/tasks/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_tasks(&self, response: HttpResponse) -> Result<Vec<Task>, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_create_task(&self, response: HttpResponse) -> Result<Task, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_update_task(&self, response: HttpResponse) -> Result<Task, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// DELETE echoes the removed task in its body; the client has no use
    /// for it, so success parses to `()`.
    pub fn parse_delete_task(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.status == 200 {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
