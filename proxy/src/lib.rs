//! Passthrough proxy for the upstream country API.
//!
//! # Design
//! One read endpoint: `GET /api/countries` issues a single GET to the
//! configured upstream and relays the JSON body unchanged. Transport
//! failures, non-success upstream statuses, and everything in between
//! collapse to a `500` with a fixed JSON error object — the client's fetch
//! layer treats them all the same anyway. The upstream request carries
//! `Cache-Control: no-store` so no intermediary serves a stale dataset; the
//! proxy itself holds no state and caches nothing.
//!
//! [`mock_upstream`] serves a canned body at the real API's path shape, for
//! integration tests and offline development.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;

/// The real country dataset endpoint.
pub const RESTCOUNTRIES_URL: &str = "https://restcountries.com/v3.1/all";

#[derive(Clone)]
struct ProxyState {
    upstream_url: String,
    http: reqwest::Client,
}

/// Router for the passthrough endpoint, relaying `upstream_url`.
pub fn app(upstream_url: &str) -> Router {
    let state = ProxyState {
        upstream_url: upstream_url.to_string(),
        http: reqwest::Client::new(),
    };
    Router::new()
        .route("/api/countries", get(list_countries))
        .with_state(state)
}

pub async fn run(listener: TcpListener, upstream_url: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(upstream_url)).await
}

/// Serve [`mock_upstream`] on `listener`, for test harnesses that cannot
/// construct an axum router themselves.
pub async fn run_mock_upstream(listener: TcpListener, body: String) -> Result<(), std::io::Error> {
    axum::serve(listener, mock_upstream(body)).await
}

/// Router standing in for the upstream API: serves `body` at `/v3.1/all`.
pub fn mock_upstream(body: String) -> Router {
    Router::new().route(
        "/v3.1/all",
        get(move || {
            let body = body.clone();
            async move { ([(header::CONTENT_TYPE, "application/json")], body) }
        }),
    )
}

async fn list_countries(State(state): State<ProxyState>) -> Response {
    match fetch_upstream(&state).await {
        Ok(body) => {
            tracing::debug!(bytes = body.len(), "relaying upstream country list");
            ([(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
        Err(err) => {
            tracing::error!(upstream = %state.upstream_url, error = %err, "error fetching countries");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to fetch countries" })),
            )
                .into_response()
        }
    }
}

async fn fetch_upstream(state: &ProxyState) -> Result<String, reqwest::Error> {
    state
        .http
        .get(&state.upstream_url)
        .header(reqwest::header::CACHE_CONTROL, "no-store")
        .send()
        .await?
        .error_for_status()?
        .text()
        .await
}
