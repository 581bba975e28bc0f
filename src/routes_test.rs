use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use tower::ServiceExt;

use super::*;

async fn status_of(method: Method, uri: &str) -> StatusCode {
    let request = Request::builder().method(method).uri(uri).body(Body::empty()).unwrap();
    base_routes().oneshot(request).await.unwrap().status()
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(status_of(Method::GET, "/healthz").await, StatusCode::OK);
}

#[tokio::test]
async fn healthz_rejects_post() {
    assert_eq!(status_of(Method::POST, "/healthz").await, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn base_routes_do_not_serve_app_paths() {
    assert_eq!(status_of(Method::GET, "/business/dashboard").await, StatusCode::NOT_FOUND);
}
