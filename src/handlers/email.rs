use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::db::models::EmailLog;
use crate::error::AppError;
use crate::handlers::AppJson;
use crate::router::AppState;

#[derive(Debug, Deserialize)]
pub struct SendEmailRequest {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// POST /api/email/send
///
/// Missing Gmail configuration short-circuits with a localized 400 before
/// any transport work. A successful relay is recorded in `email_logs`.
pub async fn send(
    State(state): State<AppState>,
    AppJson(req): AppJson<SendEmailRequest>,
) -> Result<Json<Value>, AppError> {
    if !state.mailer.is_configured() {
        return Err(AppError::MailConfigIncomplete);
    }

    state
        .mailer
        .send(&req.recipient, &req.subject, &req.body)
        .await?;

    state
        .store
        .insert_email_log(&req.recipient, &req.subject, &req.body)
        .await
        .map_err(|e| AppError::db("حدث خطأ أثناء إرسال البريد الإلكتروني", e))?;

    Ok(Json(json!({ "success": true })))
}

/// GET /api/email/logs — newest 50 entries.
pub async fn logs(State(state): State<AppState>) -> Result<Json<Vec<EmailLog>>, AppError> {
    let logs = state
        .store
        .list_email_logs()
        .await
        .map_err(|e| AppError::db("Failed to fetch email logs", e))?;
    Ok(Json(logs))
}
