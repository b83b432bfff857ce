use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::*;
use crate::config::{DEFAULT_PORT, default_classic_dir};

fn test_config() -> HostConfig {
    HostConfig { port: DEFAULT_PORT, classic_dir: default_classic_dir() }
}

async fn status_of(path: &str) -> StatusCode {
    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    static_routes(&test_config()).oneshot(request).await.unwrap().status()
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(status_of("/healthz").await, StatusCode::OK);
}

#[tokio::test]
async fn classic_pages_are_served() {
    assert_eq!(status_of("/classic/index.html").await, StatusCode::OK);
    assert_eq!(status_of("/classic/chat.html").await, StatusCode::OK);
}

#[tokio::test]
async fn unknown_classic_file_is_not_found() {
    assert_eq!(status_of("/classic/missing.html").await, StatusCode::NOT_FOUND);
}
