use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use crate::db::models::Followup;
use crate::db::payloads::FollowupInput;
use crate::error::AppError;
use crate::handlers::AppJson;
use crate::router::AppState;

/// List rows carry `manager_name` resolved through a left join; followups
/// pointing at a deleted manager keep a null name rather than disappearing.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Followup>>, AppError> {
    let followups = state
        .store
        .list_followups()
        .await
        .map_err(|e| AppError::db("Failed to fetch followups", e))?;
    Ok(Json(followups))
}

pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<FollowupInput>,
) -> Result<Json<Value>, AppError> {
    let id = state
        .store
        .insert_followup(&input)
        .await
        .map_err(|e| AppError::db("Failed to create followup", e))?;
    Ok(Json(json!({ "id": id })))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AppJson(input): AppJson<FollowupInput>,
) -> Result<Json<Value>, AppError> {
    state
        .store
        .update_followup(id, &input)
        .await
        .map_err(|e| AppError::db("Failed to update followup", e))?;
    Ok(Json(json!({ "success": true })))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    state
        .store
        .delete_followup(id)
        .await
        .map_err(|e| AppError::db("Failed to delete followup", e))?;
    Ok(Json(json!({ "success": true })))
}
