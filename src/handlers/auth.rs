use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use crate::error::AppError;
use crate::handlers::AppJson;
use crate::router::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /api/auth/login
///
/// Returns `{user:{id,username,role}}` on success. Unknown usernames and
/// wrong passwords produce the same localized 401 so probing cannot tell
/// them apart.
pub async fn login(
    State(state): State<AppState>,
    AppJson(req): AppJson<LoginRequest>,
) -> Result<Json<Value>, AppError> {
    let user = state
        .store
        .find_user_by_username(&req.username)
        .await
        .map_err(|e| AppError::Internal(Box::new(e)))?
        .ok_or(AppError::InvalidCredentials)?;

    let valid = bcrypt::verify(&req.password, &user.password)
        .map_err(|e| AppError::Internal(Box::new(e)))?;
    if !valid {
        return Err(AppError::InvalidCredentials);
    }

    info!(username = %user.username, role = %user.role, "login succeeded");
    Ok(Json(json!({
        "user": {
            "id": user.id,
            "username": user.username,
            "role": user.role,
        }
    })))
}
