use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use crate::db::models::School;
use crate::db::payloads::SchoolInput;
use crate::error::AppError;
use crate::handlers::AppJson;
use crate::router::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<School>>, AppError> {
    let schools = state
        .store
        .list_schools()
        .await
        .map_err(|e| AppError::db("Failed to fetch schools", e))?;
    Ok(Json(schools))
}

pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<SchoolInput>,
) -> Result<Json<Value>, AppError> {
    let id = state
        .store
        .insert_school(&input)
        .await
        .map_err(|e| AppError::db("Failed to create school", e))?;
    Ok(Json(json!({ "id": id })))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AppJson(input): AppJson<SchoolInput>,
) -> Result<Json<Value>, AppError> {
    state
        .store
        .update_school(id, &input)
        .await
        .map_err(|e| AppError::db("Failed to update school", e))?;
    Ok(Json(json!({ "success": true })))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    state
        .store
        .delete_school(id)
        .await
        .map_err(|e| AppError::db("Failed to delete school", e))?;
    Ok(Json(json!({ "success": true })))
}
