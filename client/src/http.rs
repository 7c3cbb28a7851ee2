//! HTTP requests and responses as plain data.
//!
//! # Design
//! `TodoApi` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network; the repository layer executes the actual
//! round-trip. Keeping the build/parse core free of I/O makes every wire
//! interaction testable with literal values.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data, built by `TodoApi::build_*`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data, consumed by `TodoApi::parse_*`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}
