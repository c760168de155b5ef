use axum::{extract::State, Json};
use serde_json::{json, Value};
use service_core::error::AppError;

use crate::startup::AppState;

/// Dot path of the open/closed flag inside the configuration document.
const IS_OPEN_PATH: &str = "settings.isOpen";

/// PATCH /api/status-loja — flips `settings.isOpen` and nothing else.
///
/// `isOpen` must be strictly boolean; `"true"`, `1` and friends are rejected
/// before the store is touched.
#[tracing::instrument(skip(state, body))]
pub async fn update_store_status(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<Json<Value>, AppError> {
    let store = state.store()?;

    let is_open = body
        .as_ref()
        .and_then(|Json(payload)| payload.get("isOpen"))
        .and_then(Value::as_bool)
        .ok_or_else(|| {
            AppError::BadRequest(anyhow::anyhow!("O campo 'isOpen' deve ser um booleano."))
        })?;

    store.patch_field(IS_OPEN_PATH, &Value::Bool(is_open)).await?;

    let estado = if is_open { "ABERTA" } else { "FECHADA" };
    Ok(Json(json!({
        "mensagem": format!("Loja {} com sucesso.", estado),
        "estado": is_open,
    })))
}
