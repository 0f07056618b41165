use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use crate::db::models::Appointment;
use crate::db::payloads::AppointmentInput;
use crate::error::AppError;
use crate::handlers::AppJson;
use crate::router::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Appointment>>, AppError> {
    let appointments = state
        .store
        .list_appointments()
        .await
        .map_err(|e| AppError::db("Failed to fetch appointments", e))?;
    Ok(Json(appointments))
}

pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<AppointmentInput>,
) -> Result<Json<Value>, AppError> {
    let id = state
        .store
        .insert_appointment(&input)
        .await
        .map_err(|e| AppError::db("Failed to create appointment", e))?;
    Ok(Json(json!({ "id": id })))
}

/// Full-row overwrite; the `notified` column is deliberately left alone
/// (no write path touches it, see the reminder module notes).
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AppJson(input): AppJson<AppointmentInput>,
) -> Result<Json<Value>, AppError> {
    state
        .store
        .update_appointment(id, &input)
        .await
        .map_err(|e| AppError::db("Failed to update appointment", e))?;
    Ok(Json(json!({ "success": true })))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    state
        .store
        .delete_appointment(id)
        .await
        .map_err(|e| AppError::db("Failed to delete appointment", e))?;
    Ok(Json(json!({ "success": true })))
}
