use axum::http::{Request, StatusCode};
use axum::routing::get;
use country_proxy::{app, mock_upstream};
use http_body_util::BodyExt;
use tower::ServiceExt;

const UPSTREAM_BODY: &str = r#"[{"cca3":"FRA","name":{"common":"France","official":"French Republic"},"capital":["Paris"],"population":67391582,"region":"Europe","flags":{"png":"https://flagcdn.com/w320/fr.png"}}]"#;

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

/// Serve `router` on a random local port and return its base URL.
async fn spawn_server(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn get_countries() -> Request<String> {
    Request::builder()
        .uri("/api/countries")
        .body(String::new())
        .unwrap()
}

#[tokio::test]
async fn passthrough_relays_upstream_body_unchanged() {
    let upstream = spawn_server(mock_upstream(UPSTREAM_BODY.to_string())).await;
    let app = app(&format!("{upstream}/v3.1/all"));

    let resp = app.oneshot(get_countries()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "application/json"
    );
    let body = body_bytes(resp).await;
    assert_eq!(body, UPSTREAM_BODY.as_bytes());
}

#[tokio::test]
async fn upstream_error_status_returns_500_with_error_json() {
    let failing = axum::Router::new().route(
        "/v3.1/all",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "upstream down") }),
    );
    let upstream = spawn_server(failing).await;
    let app = app(&format!("{upstream}/v3.1/all"));

    let resp = app.oneshot(get_countries()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(body["error"], "Failed to fetch countries");
}

#[tokio::test]
async fn unreachable_upstream_returns_500_with_error_json() {
    // Bind and immediately drop a listener so the port refuses connections.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let app = app(&format!("http://{addr}/v3.1/all"));
    let resp = app.oneshot(get_countries()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(body["error"], "Failed to fetch countries");
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = app("http://127.0.0.1:1/v3.1/all");
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/unknown")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn mock_upstream_serves_canned_body() {
    let resp = mock_upstream(UPSTREAM_BODY.to_string())
        .oneshot(
            Request::builder()
                .uri("/v3.1/all")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await, UPSTREAM_BODY.as_bytes());
}
