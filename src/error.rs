use axum::extract::rejection::JsonRejection;
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;
use thiserror::Error as ThisError;
use tracing::error;

use crate::service::mailer::MailError;

/// Localized authentication failure; unknown username and wrong password are
/// deliberately indistinguishable.
pub const MSG_INVALID_CREDENTIALS: &str = "اسم المستخدم أو كلمة المرور غير صحيحة";
pub const MSG_SERVER_ERROR: &str = "حدث خطأ في الخادم";
pub const MSG_MAIL_CONFIG_INCOMPLETE: &str =
    "تكوين Gmail غير مكتمل. يرجى إعداد GMAIL_USER و GMAIL_APP_PASSWORD في ملف .env";
pub const MSG_MAIL_SEND_FAILED: &str = "فشل إرسال البريد الإلكتروني";

/// Handler-boundary error. Every variant collapses into an
/// `{ "error": "<message>" }` JSON body; the underlying cause is logged
/// before it is discarded, never surfaced to the caller.
#[derive(Debug, ThisError)]
pub enum AppError {
    /// Database failure with the per-route static message the caller sees.
    #[error("{message}")]
    Db {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("{MSG_INVALID_CREDENTIALS}")]
    InvalidCredentials,

    /// Unexpected failure inside the login flow.
    #[error("{MSG_SERVER_ERROR}")]
    Internal(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("{MSG_MAIL_CONFIG_INCOMPLETE}")]
    MailConfigIncomplete,

    #[error("{MSG_MAIL_SEND_FAILED}")]
    Mail(#[from] MailError),

    /// Unreadable or malformed request body; keeps axum's status but wraps
    /// its message in the shared error body shape.
    #[error("{}", .0.body_text())]
    BadBody(#[from] JsonRejection),
}

impl AppError {
    pub fn db(message: &'static str, source: sqlx::Error) -> Self {
        Self::Db { message, source }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::MailConfigIncomplete => StatusCode::BAD_REQUEST,
            AppError::BadBody(rejection) => rejection.status(),
            AppError::Db { .. } | AppError::Internal(_) | AppError::Mail(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match &self {
            AppError::Db { message, source } => {
                error!(error = %source, "{message}");
            }
            AppError::Internal(source) => {
                error!(error = %source, "login flow failed");
            }
            AppError::Mail(source) => {
                error!(error = %source, "mail send failed");
            }
            AppError::InvalidCredentials
            | AppError::MailConfigIncomplete
            | AppError::BadBody(_) => {}
        }
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
