use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Error taxonomy for the menu backend.
///
/// Validation and not-found errors carry caller-facing messages; store and
/// internal failures are logged server-side and answered with a generic
/// message so driver details never leak to callers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(anyhow::Error),

    #[error("Not found: {0}")]
    NotFound(anyhow::Error),

    #[error("Store not configured")]
    StoreUnavailable,

    #[error("Store error: {0}")]
    Store(anyhow::Error),

    #[error("Configuration error: {0}")]
    Config(anyhow::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(anyhow::Error::new(err))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::Store(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            erro: String,
        }

        let (status, mensagem) = match self {
            AppError::BadRequest(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            AppError::StoreUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Banco de dados não configurado.".to_string(),
            ),
            AppError::Store(err) => {
                tracing::error!("Store operation failed: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro ao acessar o banco de dados.".to_string(),
                )
            }
            AppError::Config(err) => {
                tracing::error!("Configuration error surfaced in a request: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro de configuração do servidor.".to_string(),
                )
            }
            AppError::Internal(err) => {
                tracing::error!("Internal error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro interno do servidor.".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { erro: mensagem })).into_response()
    }
}
