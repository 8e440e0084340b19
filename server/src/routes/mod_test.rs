use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn healthz_is_routed() {
    let app = ops_routes::<()>();
    let response = app.oneshot(get_request("/healthz")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_ops_path_is_not_found() {
    let app = ops_routes::<()>();
    let response = app.oneshot(get_request("/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn layered_router_still_serves_healthz() {
    for compression in [true, false] {
        let config = ServerConfig { compression, ..ServerConfig::default() };
        let app = with_layers(ops_routes(), &config);
        let response = app.oneshot(get_request("/healthz")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "compression={compression}");
    }
}
