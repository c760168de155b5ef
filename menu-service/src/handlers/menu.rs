use axum::{extract::State, Json};
use serde_json::{json, Value};
use service_core::error::AppError;

use crate::startup::AppState;

/// GET /api/menu — pass-through read of the configuration document.
///
/// The document is returned as-is, even when it lacks `categories`: presence
/// is enforced at write time only.
#[tracing::instrument(skip(state))]
pub async fn get_menu(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let store = state.store()?;

    match store.fetch().await? {
        Some(menu) => Ok(Json(menu)),
        None => Err(AppError::NotFound(anyhow::anyhow!(
            "Cardápio não encontrado."
        ))),
    }
}

/// PUT /api/menu — full overwrite of the configuration document.
///
/// The only safeguard against erasing the document by accident is the
/// `categories` presence check; the field's internal shape is opaque.
#[tracing::instrument(skip(state, body))]
pub async fn replace_menu(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<Json<Value>, AppError> {
    let store = state.store()?;

    let Some(Json(payload)) = body else {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Corpo da requisição ausente ou inválido."
        )));
    };
    if payload.get("categories").is_none() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "O campo 'categories' é obrigatório."
        )));
    }

    store.replace(&payload).await?;

    Ok(Json(json!({ "mensagem": "Menu atualizado com sucesso!" })))
}
