use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use crate::db::models::Manager;
use crate::db::payloads::ManagerInput;
use crate::error::AppError;
use crate::handlers::AppJson;
use crate::router::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Manager>>, AppError> {
    let managers = state
        .store
        .list_managers()
        .await
        .map_err(|e| AppError::db("Failed to fetch managers", e))?;
    Ok(Json(managers))
}

pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<ManagerInput>,
) -> Result<Json<Value>, AppError> {
    let id = state
        .store
        .insert_manager(&input)
        .await
        .map_err(|e| AppError::db("Failed to create manager", e))?;
    Ok(Json(json!({ "id": id })))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AppJson(input): AppJson<ManagerInput>,
) -> Result<Json<Value>, AppError> {
    state
        .store
        .update_manager(id, &input)
        .await
        .map_err(|e| AppError::db("Failed to update manager", e))?;
    Ok(Json(json!({ "success": true })))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    state
        .store
        .delete_manager(id)
        .await
        .map_err(|e| AppError::db("Failed to delete manager", e))?;
    Ok(Json(json!({ "success": true })))
}
