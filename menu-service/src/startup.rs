//! Application startup and lifecycle management.
//!
//! Wires the router (JSON bodies via axum extractors, permissive CORS,
//! request tracing), resolves the store handle, binds the listener and runs
//! the server. A credential failure at startup downgrades the process to a
//! storeless state instead of terminating it.

use axum::{
    routing::{get, patch},
    Router,
};
use service_core::error::AppError;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::MenuConfig;
use crate::handlers::{get_menu, health_check, liveness, replace_menu, update_store_status};
use crate::services::{MenuStore, MongoMenuStore, StoreCredentials};

/// Shared application state.
///
/// The store handle is written once here and only read afterwards; `None`
/// means the process is running degraded and every database-backed route
/// answers 500 without reaching the store.
#[derive(Clone)]
pub struct AppState {
    pub config: MenuConfig,
    pub store: Option<Arc<dyn MenuStore>>,
}

impl AppState {
    pub fn store(&self) -> Result<&dyn MenuStore, AppError> {
        self.store
            .as_deref()
            .ok_or(AppError::StoreUnavailable)
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(liveness))
        .route("/health", get(health_check))
        .route("/api/menu", get(get_menu).put(replace_menu))
        .route("/api/status-loja", patch(update_store_status))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    ///
    /// Credential or connection problems leave the store unset; the server
    /// still comes up so the liveness route keeps answering.
    pub async fn build(config: MenuConfig) -> Result<Self, AppError> {
        let store: Option<Arc<dyn MenuStore>> = match StoreCredentials::load(
            &config.store.credentials_file,
        ) {
            Ok(credentials) => match MongoMenuStore::connect(&credentials, &config.store).await {
                Ok(store) => Some(Arc::new(store)),
                Err(e) => {
                    tracing::error!(
                        "Failed to initialize the menu store: {}. Running degraded; database routes will answer 500.",
                        e
                    );
                    None
                }
            },
            Err(e) => {
                tracing::error!(
                    "Failed to resolve store credentials: {}. Running degraded; database routes will answer 500.",
                    e
                );
                None
            }
        };

        // Bind the listener (port 0 = random port for testing)
        let address = format!("{}:{}", config.common.host, config.common.port);
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            state: AppState { config, store },
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);
        axum::serve(self.listener, router).await
    }
}
