use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode},
};
use serde_json::{Value, json};
use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

async fn test_app() -> (Router, PathBuf) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "mufattish-api-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));

    let database_url = format!("sqlite:{}", temp_path.display());
    let store = mufattish::Storage::connect(&database_url)
        .await
        .expect("failed to open test database");
    store.init_schema().await.expect("failed to init schema");
    store
        .ensure_default_account()
        .await
        .expect("failed to seed default account");

    let state = mufattish::router::AppState::new(store, mufattish::Mailer::unconfigured());
    (mufattish::router::dashboard_router(state), temp_path)
}

async fn request(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header("content-type", "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let resp = app
        .clone()
        .oneshot(builder.body(body).expect("failed to build request"))
        .await
        .expect("request failed");

    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body was not JSON")
    };
    (status, value)
}

#[tokio::test]
async fn login_with_seeded_credentials_returns_user_object() {
    let (app, db) = test_app().await;

    let (status, body) = request(
        &app,
        Method::POST,
        "/api/auth/login",
        Some(json!({"username": "admin", "password": "admin123"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["username"], "admin");
    assert_eq!(body["user"]["role"], "admin");
    assert!(body["user"]["id"].as_i64().is_some());
    assert!(body["user"].get("password").is_none());

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn login_with_wrong_password_is_localized_401_without_user() {
    let (app, db) = test_app().await;

    for payload in [
        json!({"username": "admin", "password": "nope"}),
        json!({"username": "ghost", "password": "admin123"}),
    ] {
        let (status, body) = request(&app, Method::POST, "/api/auth/login", Some(payload)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "اسم المستخدم أو كلمة المرور غير صحيحة");
        assert!(body.get("user").is_none());
    }

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn creating_a_manager_adds_exactly_one_row_with_matching_fields() {
    let (app, db) = test_app().await;

    let (status, before) = request(&app, Method::GET, "/api/managers", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(before.as_array().map(Vec::len), Some(0));

    let (status, created) = request(
        &app,
        Method::POST,
        "/api/managers",
        Some(json!({
            "name": "Huda Saleh",
            "phone": "0501234567",
            "email": "huda@example.org",
            "department": "Primary education",
            "notes": null
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_i64().expect("create did not return an id");

    let (_, after) = request(&app, Method::GET, "/api/managers", None).await;
    let list = after.as_array().expect("list was not an array");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"].as_i64(), Some(id));
    assert_eq!(list[0]["name"], "Huda Saleh");
    assert_eq!(list[0]["department"], "Primary education");
    assert_eq!(list[0]["notes"], Value::Null);

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn updating_a_school_overwrites_every_field() {
    let (app, db) = test_app().await;

    let (_, created) = request(
        &app,
        Method::POST,
        "/api/schools",
        Some(json!({
            "name": "Al Noor School",
            "location": "East district",
            "principal_name": "Mona Khaled",
            "phone": "0551112222",
            "email": "alnoor@example.org",
            "notes": "two buildings"
        })),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    // Full-row overwrite: fields omitted from the payload become null.
    let (status, body) = request(
        &app,
        Method::PUT,
        &format!("/api/schools/{id}"),
        Some(json!({
            "name": "Al Noor Model School",
            "location": "East district",
            "principal_name": "Mona Khaled",
            "phone": null,
            "email": null,
            "notes": null
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, list) = request(&app, Method::GET, "/api/schools", None).await;
    let row = &list.as_array().unwrap()[0];
    assert_eq!(row["name"], "Al Noor Model School");
    assert_eq!(row["phone"], Value::Null);
    assert_eq!(row["notes"], Value::Null);

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn deleting_a_nonexistent_id_reports_success_and_changes_nothing() {
    let (app, db) = test_app().await;

    let (_, created) = request(
        &app,
        Method::POST,
        "/api/reports",
        Some(json!({
            "title": "Term visit",
            "content": "Routine inspection",
            "inspector_name": "Sami Nasser",
            "report_date": "2026-02-10",
            "report_type": "field"
        })),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = request(&app, Method::DELETE, "/api/reports/99999", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, list) = request(&app, Method::GET, "/api/reports", None).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"].as_i64(), Some(id));

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn followup_list_joins_manager_name_and_tolerates_orphans() {
    let (app, db) = test_app().await;

    let (_, manager) = request(
        &app,
        Method::POST,
        "/api/managers",
        Some(json!({"name": "Omar Fathi", "phone": null, "email": null, "department": null, "notes": null})),
    )
    .await;
    let manager_id = manager["id"].as_i64().unwrap();

    let (_, _) = request(
        &app,
        Method::POST,
        "/api/followups",
        Some(json!({
            "manager_id": manager_id,
            "followup_date": "2026-04-01",
            "status": "open",
            "notes": "call back"
        })),
    )
    .await;

    let (_, list) = request(&app, Method::GET, "/api/followups", None).await;
    assert_eq!(list.as_array().unwrap()[0]["manager_name"], "Omar Fathi");

    // Deleting the manager does not cascade; the followup survives with a
    // null manager_name.
    let (status, _) =
        request(&app, Method::DELETE, &format!("/api/managers/{manager_id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = request(&app, Method::GET, "/api/followups", None).await;
    let row = &list.as_array().unwrap()[0];
    assert_eq!(row["manager_id"].as_i64(), Some(manager_id));
    assert_eq!(row["manager_name"], Value::Null);

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn productivity_score_is_computed_server_side() {
    let (app, db) = test_app().await;

    let (status, created) = request(
        &app,
        Method::POST,
        "/api/productivity",
        Some(json!({
            "entity_name": "Al Noor School",
            "entity_type": "school",
            "visits": 5,
            "reports_submitted": 5,
            "period": "2026-Q1"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(created["id"].as_i64().is_some());

    let (_, list) = request(&app, Method::GET, "/api/productivity", None).await;
    let row = &list.as_array().unwrap()[0];
    assert_eq!(row["score"].as_f64(), Some(50.0));
    assert_eq!(row["visits"].as_i64(), Some(5));
    assert_eq!(row["reports_submitted"].as_i64(), Some(5));

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn productivity_score_above_one_hundred_is_persisted_unclamped() {
    let (app, db) = test_app().await;

    let (_, _) = request(
        &app,
        Method::POST,
        "/api/productivity",
        Some(json!({
            "entity_name": "District office",
            "entity_type": "office",
            "visits": 20,
            "reports_submitted": 20,
            "period": "2026-Q1"
        })),
    )
    .await;

    let (_, list) = request(&app, Method::GET, "/api/productivity", None).await;
    assert_eq!(list.as_array().unwrap()[0]["score"].as_f64(), Some(200.0));

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn appointment_crud_round_trip() {
    let (app, db) = test_app().await;

    let (_, created) = request(
        &app,
        Method::POST,
        "/api/appointments",
        Some(json!({
            "title": "School board meeting",
            "description": "Quarterly review",
            "appointment_date": "2026-05-20T10:00",
            "location": "Main office",
            "attendees": "Huda, Omar",
            "status": "scheduled"
        })),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (_, list) = request(&app, Method::GET, "/api/appointments", None).await;
    let row = &list.as_array().unwrap()[0];
    assert_eq!(row["title"], "School board meeting");
    assert_eq!(row["notified"], false);

    let (status, body) = request(
        &app,
        Method::PUT,
        &format!("/api/appointments/{id}"),
        Some(json!({
            "title": "School board meeting",
            "description": "Quarterly review",
            "appointment_date": "2026-05-20T10:00",
            "location": "Main office",
            "attendees": "Huda, Omar",
            "status": "cancelled"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, list) = request(&app, Method::GET, "/api/appointments", None).await;
    assert_eq!(list.as_array().unwrap()[0]["status"], "cancelled");

    let (_, body) = request(&app, Method::DELETE, &format!("/api/appointments/{id}"), None).await;
    assert_eq!(body["success"], true);
    let (_, list) = request(&app, Method::GET, "/api/appointments", None).await;
    assert_eq!(list.as_array().map(Vec::len), Some(0));

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn schedule_create_defaults_to_pending_status() {
    let (app, db) = test_app().await;

    let (_, _) = request(
        &app,
        Method::POST,
        "/api/schedules",
        Some(json!({
            "recipient": "principal@example.org",
            "subject": "Monthly summary",
            "content": "See attached figures.",
            "scheduled_date": "2026-06-01T08:00"
        })),
    )
    .await;

    let (_, list) = request(&app, Method::GET, "/api/schedules", None).await;
    assert_eq!(list.as_array().unwrap()[0]["status"], "pending");

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn email_send_without_gmail_config_is_localized_400() {
    let (app, db) = test_app().await;

    let (status, body) = request(
        &app,
        Method::POST,
        "/api/email/send",
        Some(json!({
            "recipient": "someone@example.org",
            "subject": "hello",
            "body": "world"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "تكوين Gmail غير مكتمل. يرجى إعداد GMAIL_USER و GMAIL_APP_PASSWORD في ملف .env"
    );

    // Nothing was logged for the rejected send.
    let (status, logs) = request(&app, Method::GET, "/api/email/logs", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(logs.as_array().map(Vec::len), Some(0));

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn malformed_request_body_keeps_the_json_error_shape() {
    let (app, db) = test_app().await;

    // Syntactically broken JSON.
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/managers")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let body: Value = serde_json::from_slice(&bytes).expect("rejection body was not JSON");
    assert!(body["error"].as_str().is_some_and(|m| !m.is_empty()));

    // Valid JSON missing a required field.
    let (status, body) = request(
        &app,
        Method::POST,
        "/api/managers",
        Some(json!({"phone": "0501234567"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().is_some_and(|m| !m.is_empty()));

    let _ = fs::remove_file(&db);
}

#[tokio::test]
async fn seeding_the_default_account_twice_keeps_a_single_row() {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();
    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "mufattish-seed-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));

    let store = mufattish::Storage::connect(&format!("sqlite:{}", temp_path.display()))
        .await
        .expect("failed to open test database");
    store.init_schema().await.expect("failed to init schema");
    store.ensure_default_account().await.expect("first seed failed");
    store.ensure_default_account().await.expect("second seed failed");

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE username = 'admin'")
        .fetch_one(store.pool())
        .await
        .expect("count query failed");
    assert_eq!(count.0, 1);

    let _ = fs::remove_file(&temp_path);
}
