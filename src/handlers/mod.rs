//! One handler module per resource root. Every handler performs exactly one
//! validated SQL statement through the storage handle and collapses any
//! failure into its route's static message.

pub mod appointments;
pub mod auth;
pub mod email;
pub mod followups;
pub mod managers;
pub mod productivity;
pub mod reports;
pub mod schedules;
pub mod schools;

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor whose rejection carries the same
/// `{ "error": "<message>" }` shape as every other failure, instead of
/// axum's plain-text default.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
