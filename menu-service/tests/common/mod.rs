#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use menu_service::config::{MenuConfig, StoreConfig};
use menu_service::services::MenuStore;
use menu_service::startup::{build_router, AppState};
use serde_json::Value;
use service_core::config::Config as CoreConfig;
use service_core::error::AppError;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::util::ServiceExt;

/// In-memory stand-in for the MongoDB-backed store.
///
/// Mirrors the adapter contract: `replace` upserts, `patch_field` applies
/// `$set` dot-path semantics (creating intermediate maps) and fails when no
/// document exists. A switchable failure mode simulates store outages.
pub struct FakeMenuStore {
    document: RwLock<Option<Value>>,
    fail: bool,
}

impl FakeMenuStore {
    pub fn empty() -> Self {
        Self {
            document: RwLock::new(None),
            fail: false,
        }
    }

    pub fn with_document(document: Value) -> Self {
        Self {
            document: RwLock::new(Some(document)),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            document: RwLock::new(None),
            fail: true,
        }
    }

    pub async fn document(&self) -> Option<Value> {
        self.document.read().await.clone()
    }
}

#[async_trait]
impl MenuStore for FakeMenuStore {
    async fn fetch(&self) -> Result<Option<Value>, AppError> {
        if self.fail {
            return Err(AppError::Store(anyhow::anyhow!("simulated store outage")));
        }
        Ok(self.document.read().await.clone())
    }

    async fn replace(&self, payload: &Value) -> Result<(), AppError> {
        if self.fail {
            return Err(AppError::Store(anyhow::anyhow!("simulated store outage")));
        }
        *self.document.write().await = Some(payload.clone());
        Ok(())
    }

    async fn patch_field(&self, dot_path: &str, value: &Value) -> Result<(), AppError> {
        if self.fail {
            return Err(AppError::Store(anyhow::anyhow!("simulated store outage")));
        }
        let mut guard = self.document.write().await;
        let map = guard
            .as_mut()
            .and_then(Value::as_object_mut)
            .ok_or_else(|| {
                AppError::Store(anyhow::anyhow!("no document at the configured path to update"))
            })?;
        set_dot_path(map, dot_path, value.clone());
        Ok(())
    }
}

fn set_dot_path(target: &mut serde_json::Map<String, Value>, dot_path: &str, value: Value) {
    match dot_path.split_once('.') {
        Some((head, rest)) => {
            let child = target
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(serde_json::Map::new()));
            if !child.is_object() {
                *child = Value::Object(serde_json::Map::new());
            }
            if let Some(map) = child.as_object_mut() {
                set_dot_path(map, rest, value);
            }
        }
        None => {
            target.insert(dot_path.to_string(), value);
        }
    }
}

fn test_config() -> MenuConfig {
    MenuConfig {
        common: CoreConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        store: StoreConfig {
            credentials_file: "mongodb-credentials.json".to_string(),
            database: "cardapio_test".to_string(),
            collection: "config".to_string(),
            document_id: "menu".to_string(),
        },
    }
}

pub fn app_with_store(store: Arc<dyn MenuStore>) -> Router {
    build_router(AppState {
        config: test_config(),
        store: Some(store),
    })
}

pub fn app_without_store() -> Router {
    build_router(AppState {
        config: test_config(),
        store: None,
    })
}

/// Sends a request with an optional JSON body and decodes the JSON response.
pub async fn request_json(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<&Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(payload) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

/// Sends a bodyless request and returns the response as text.
pub async fn request_text(app: Router, method: &str, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8_lossy(&bytes).to_string())
}
