#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use ebuilder_api::config::{ServerConfig, StoreBackend};
use ebuilder_api::router::build_app_router;
use ebuilder_api::state::AppState;
use ebuilder_db::MemoryTemplateStore;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

pub const TEST_LAYOUT: &str =
    "<html><h1>{{title}}</h1><img src=\"{{imageUrl}}\"><div>{{content}}</div></html>";

const BOUNDARY: &str = "----ebuilder-test-boundary";

/// A router wired to an in-memory store and a scratch directory holding
/// the layout file and uploads.
pub struct TestApp {
    pub state: AppState,
    pub store: Arc<MemoryTemplateStore>,
    pub dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_layout(Some(TEST_LAYOUT))
    }

    /// `None` leaves the layout file missing.
    pub fn with_layout(layout: Option<&str>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let layout_path = dir.path().join("layout.html");
        if let Some(layout) = layout {
            std::fs::write(&layout_path, layout).unwrap();
        }

        let config = test_config(dir.path().join("uploads"), layout_path);
        let store = Arc::new(MemoryTemplateStore::new());
        let state = AppState::new(store.clone(), config);

        Self { state, store, dir }
    }

    pub fn upload_dir(&self) -> PathBuf {
        self.state.config.upload_dir.clone()
    }

    /// A fresh router sharing this app's state.
    pub fn router(&self) -> Router {
        build_app_router(self.state.clone())
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(upload_dir: PathBuf, layout_path: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store_backend: StoreBackend::Memory,
        database_url: None,
        upload_dir,
        layout_path,
        max_upload_bytes: 1024 * 1024,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, "POST", uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, "PUT", uri, body).await
}

async fn json_request(
    app: Router,
    method: &str,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// A multipart part: `(field name, optional filename, bytes)`.
pub type Part<'a> = (&'a str, Option<&'a str>, &'a [u8]);

pub async fn post_multipart(app: Router, uri: &str, parts: &[Part<'_>]) -> Response<Body> {
    let mut body = Vec::new();
    for (name, filename, data) in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match filename {
            Some(filename) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                );
            }
            None => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
            }
        }
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::post(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

// ---------------------------------------------------------------------------
// Body helpers
// ---------------------------------------------------------------------------

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
