use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::db::models::Productivity;
use crate::db::payloads::ProductivityInput;
use crate::error::AppError;
use crate::handlers::AppJson;
use crate::router::AppState;
use crate::service::productivity::calculate_score;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Productivity>>, AppError> {
    let records = state
        .store
        .list_productivity()
        .await
        .map_err(|e| AppError::db("Failed to fetch productivity", e))?;
    Ok(Json(records))
}

/// The score is derived here from the submitted counts and stored with them;
/// clients never supply it.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<ProductivityInput>,
) -> Result<Json<Value>, AppError> {
    let score = calculate_score(input.visits, input.reports_submitted);
    let id = state
        .store
        .insert_productivity(&input, score)
        .await
        .map_err(|e| AppError::db("Failed to create productivity record", e))?;
    Ok(Json(json!({ "id": id })))
}
