//! HTTP requests and responses described as plain data.
//!
//! # Design
//! The client builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network; a [`Transport`](crate::transport::Transport)
//! implementation executes the round-trip in between. Keeping the boundary
//! as data makes the client deterministic and lets tests script responses
//! without a server.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `TaskClient::build_*` methods and handed to a transport for
/// execution.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by a transport after executing an `HttpRequest`, then passed to
/// `TaskClient::parse_*` methods for status interpretation and
/// deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
