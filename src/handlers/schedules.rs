use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use crate::db::models::SendingSchedule;
use crate::db::payloads::ScheduleInput;
use crate::error::AppError;
use crate::handlers::AppJson;
use crate::router::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<SendingSchedule>>, AppError> {
    let schedules = state
        .store
        .list_schedules()
        .await
        .map_err(|e| AppError::db("Failed to fetch schedules", e))?;
    Ok(Json(schedules))
}

/// New schedules start in the 'pending' status via the column default.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<ScheduleInput>,
) -> Result<Json<Value>, AppError> {
    let id = state
        .store
        .insert_schedule(&input)
        .await
        .map_err(|e| AppError::db("Failed to create schedule", e))?;
    Ok(Json(json!({ "id": id })))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    state
        .store
        .delete_schedule(id)
        .await
        .map_err(|e| AppError::db("Failed to delete schedule", e))?;
    Ok(Json(json!({ "success": true })))
}
