//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. The core builds [`HttpRequest`]
//! values and parses [`HttpResponse`] values without ever touching the
//! network — the caller executes the actual round-trip. This keeps the core
//! deterministic and lets tests stand in for the transport with a closure.
//!
//! Every read against the country API is a GET with no body, so a request is
//! just a URL plus headers.

/// An HTTP GET request described as plain data.
///
/// Built by [`CountryClient`](crate::client::CountryClient). The caller is
/// responsible for executing it and returning the corresponding
/// [`HttpResponse`].
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing an [`HttpRequest`], then passed
/// back to the core for status checking and decoding.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}
