//! Router harness for handler tests.

use std::path::{Path, PathBuf};

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tempfile::TempDir;
use toduo_store::Store;
use toduo_vault::VaultWriter;
use tower::ServiceExt;

use crate::server::build_router;
use crate::state::AppState;

pub struct TestApp {
    router: Router,
    vault_dir: PathBuf,
    _tmp: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        let tmp = TempDir::new().unwrap();
        let vault_dir = tmp.path().join("vault");
        let state = AppState::new(Store::new(), VaultWriter::new(&vault_dir));
        Self {
            router: build_router(state),
            vault_dir,
            _tmp: tmp,
        }
    }

    pub fn vault_dir(&self) -> &Path {
        &self.vault_dir
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body.to_string())).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body.to_string())).await
    }

    /// POST a raw JSON string and return the status with the body as text.
    pub async fn post_raw(&self, uri: &str, body: &str) -> (StatusCode, String) {
        self.send_raw(Method::POST, uri, Some(body.to_string())).await
    }

    pub async fn get_raw(&self, uri: &str) -> (StatusCode, String) {
        self.send_raw(Method::GET, uri, None).await
    }

    async fn send(&self, method: Method, uri: &str, body: Option<String>) -> (StatusCode, Value) {
        let (status, text) = self.send_raw(method, uri, body).await;
        let value = serde_json::from_str(&text).unwrap_or(Value::Null);
        (status, value)
    }

    async fn send_raw(&self, method: Method, uri: &str, body: Option<String>) -> (StatusCode, String) {
        let mut req = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                req = req.header("content-type", "application/json");
                Body::from(json)
            }
            None => Body::empty(),
        };

        let resp = self.router.clone().oneshot(req.body(body).unwrap()).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), 1_000_000).await.unwrap();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }
}
