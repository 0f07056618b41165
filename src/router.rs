use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::db::Storage;
use crate::handlers::{
    appointments, auth, email, followups, managers, productivity, reports, schedules, schools,
};
use crate::service::mailer::Mailer;

/// Shared request state: the storage handle and the outbound mailer, both
/// cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    pub store: Storage,
    pub mailer: Mailer,
}

impl AppState {
    pub fn new(store: Storage, mailer: Mailer) -> Self {
        Self { store, mailer }
    }
}

pub fn dashboard_router(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/managers", get(managers::list).post(managers::create))
        .route(
            "/api/managers/{id}",
            put(managers::update).delete(managers::delete),
        )
        .route("/api/schools", get(schools::list).post(schools::create))
        .route(
            "/api/schools/{id}",
            put(schools::update).delete(schools::delete),
        )
        .route("/api/reports", get(reports::list).post(reports::create))
        .route("/api/reports/{id}", delete(reports::delete))
        .route(
            "/api/followups",
            get(followups::list).post(followups::create),
        )
        .route(
            "/api/followups/{id}",
            put(followups::update).delete(followups::delete),
        )
        .route(
            "/api/schedules",
            get(schedules::list).post(schedules::create),
        )
        .route("/api/schedules/{id}", delete(schedules::delete))
        .route(
            "/api/productivity",
            get(productivity::list).post(productivity::create),
        )
        .route(
            "/api/appointments",
            get(appointments::list).post(appointments::create),
        )
        .route(
            "/api/appointments/{id}",
            put(appointments::update).delete(appointments::delete),
        )
        .route("/api/email/send", post(email::send))
        .route("/api/email/logs", get(email::logs))
        .with_state(state)
}
