//! Stateless request builder and response parser for the country API.
//!
//! # Design
//! `CountryClient` holds only a `base_url` and carries no mutable state
//! between calls. The read operation is split into a `build_*` method that
//! produces an [`HttpRequest`] and a `parse_*` method that consumes an
//! [`HttpResponse`]. The caller executes the actual HTTP round-trip, keeping
//! the core deterministic and free of I/O dependencies.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::Country;

/// Synchronous, stateless client for the country list endpoint.
#[derive(Debug, Clone)]
pub struct CountryClient {
    base_url: String,
}

impl CountryClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Request for the full country list. The dataset arrives in a single
    /// response; there are no query parameters.
    pub fn build_list_countries(&self) -> HttpRequest {
        HttpRequest {
            url: format!("{}/api/countries", self.base_url),
            headers: Vec::new(),
        }
    }

    /// Decode the country list response. Any non-200 status is an error, as
    /// is a body that is not a JSON array of country records.
    pub fn parse_list_countries(&self, response: HttpResponse) -> Result<Vec<Country>, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.status == 200 {
        return Ok(());
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
