//! Item collection routes.

#[cfg(test)]
#[path = "items_test.rs"]
mod items_test;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::Value;

use crate::services::items::{Item, ItemCreate, ItemError};
use crate::state::AppState;

type ItemResult<T> = Result<T, (StatusCode, Json<Value>)>;

pub(crate) fn item_error_response(err: ItemError) -> (StatusCode, Json<Value>) {
    let status = match err {
        ItemError::NotFound(_) => StatusCode::NOT_FOUND,
    };
    (status, Json(serde_json::json!({ "detail": err.to_string() })))
}

/// `GET /items/` — list every item in insertion order.
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.items.read().await.list())
}

/// `GET /items/:id` — fetch one item.
pub async fn get_item(State(state): State<AppState>, Path(item_id): Path<i64>) -> ItemResult<Json<Item>> {
    let item = state.items.read().await.get(item_id).map_err(item_error_response)?;
    Ok(Json(item))
}

/// `POST /items/` — create an item; the server assigns the id.
pub async fn create_item(State(state): State<AppState>, Json(body): Json<ItemCreate>) -> (StatusCode, Json<Item>) {
    let item = state.items.write().await.create(body);
    tracing::info!(id = item.id, "item created");
    (StatusCode::CREATED, Json(item))
}

/// `PUT /items/:id` — replace name, description and completion.
pub async fn update_item(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
    Json(body): Json<ItemCreate>,
) -> ItemResult<Json<Item>> {
    let item = state.items.write().await.update(item_id, body).map_err(item_error_response)?;
    tracing::info!(id = item_id, "item updated");
    Ok(Json(item))
}

/// `DELETE /items/:id` — remove an item.
pub async fn delete_item(State(state): State<AppState>, Path(item_id): Path<i64>) -> ItemResult<StatusCode> {
    state.items.write().await.delete(item_id).map_err(item_error_response)?;
    tracing::info!(id = item_id, "item deleted");
    Ok(StatusCode::NO_CONTENT)
}
