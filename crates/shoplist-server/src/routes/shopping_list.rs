use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use shoplist_core::error::TEXT_REQUIRED;
use shoplist_core::models::item::{DeleteOutcome, Item};
use shoplist_core::validate;
use shoplist_storage::store::remove_by_id;

use crate::audit::{AuditEvent, ITEM_RESOURCE};
use crate::error::{ApiError, ID_REQUIRED, ITEM_NOT_FOUND};
use crate::state::AppState;

pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.store.read_all().await)
}

pub async fn create_item(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    // Parsed regardless of Content-Type; browsers posting a bare string body
    // send `text/plain`.
    let body: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!(error = %e, "create body is not JSON");
            return Err(ApiError::BadRequest(TEXT_REQUIRED.to_string()));
        }
    };
    let text = validate::text_from_json(body.get("text"))?;

    let mut items = state.store.read_all().await;
    let item = Item::new(&text, jiff::Timestamp::now())?;
    items.push(item.clone());

    state
        .store
        .write_all(&items)
        .await
        .map_err(|e| ApiError::internal("Failed to add item to shopping list", e))?;

    AuditEvent::new("create", ITEM_RESOURCE, &item.id)
        .with_details(json!({ "text": item.text }))
        .emit();

    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteOutcome>, ApiError> {
    if id.is_empty() {
        return Err(ApiError::BadRequest(ID_REQUIRED.to_string()));
    }

    let mut items = state.store.read_all().await;
    if !remove_by_id(&mut items, &id) {
        return Err(ApiError::NotFound(ITEM_NOT_FOUND.to_string()));
    }

    state
        .store
        .write_all(&items)
        .await
        .map_err(|e| ApiError::internal("Failed to delete item from shopping list", e))?;

    AuditEvent::new("delete", ITEM_RESOURCE, &id).emit();

    Ok(Json(DeleteOutcome { success: true }))
}

/// DELETE without an id segment.
pub async fn missing_id() -> ApiError {
    ApiError::BadRequest(ID_REQUIRED.to_string())
}
