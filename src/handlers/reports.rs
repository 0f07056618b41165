use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use crate::db::models::Report;
use crate::db::payloads::ReportInput;
use crate::error::AppError;
use crate::handlers::AppJson;
use crate::router::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Report>>, AppError> {
    let reports = state
        .store
        .list_reports()
        .await
        .map_err(|e| AppError::db("Failed to fetch reports", e))?;
    Ok(Json(reports))
}

pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<ReportInput>,
) -> Result<Json<Value>, AppError> {
    let id = state
        .store
        .insert_report(&input)
        .await
        .map_err(|e| AppError::db("Failed to create report", e))?;
    Ok(Json(json!({ "id": id })))
}

// Reports are immutable once filed; only deletion is supported.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    state
        .store
        .delete_report(id)
        .await
        .map_err(|e| AppError::db("Failed to delete report", e))?;
    Ok(Json(json!({ "success": true })))
}
