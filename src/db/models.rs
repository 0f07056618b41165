use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Account row. The `password` column holds a bcrypt hash, never plaintext,
/// and is skipped on serialization so it cannot leak into a response body.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Manager {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub notes: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct School {
    pub id: i64,
    pub name: String,
    pub location: Option<String>,
    pub principal_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Report {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub inspector_name: String,
    pub report_date: String,
    pub report_type: Option<String>,
    pub created_at: String,
}

/// Followup row as returned by the list query, which left-joins `managers`
/// to attach the referenced manager's name. `manager_name` is `None` when
/// the reference is null or the manager has since been deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Followup {
    pub id: i64,
    pub manager_id: Option<i64>,
    pub followup_date: String,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: String,
    pub manager_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SendingSchedule {
    pub id: i64,
    pub recipient: String,
    pub subject: String,
    pub content: String,
    pub scheduled_date: String,
    pub status: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Productivity {
    pub id: i64,
    pub entity_name: String,
    pub entity_type: String,
    pub visits: i64,
    pub reports_submitted: i64,
    pub score: f64,
    pub period: String,
    pub created_at: String,
}

/// `notified` is schema-defined but no write path ever sets it; every fetch
/// therefore sees it false. Flagged upstream as an open question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Appointment {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub appointment_date: String,
    pub location: Option<String>,
    pub attendees: Option<String>,
    pub status: String,
    pub notified: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct EmailLog {
    pub id: i64,
    pub recipient: String,
    pub subject: String,
    pub body: String,
    pub sent_at: String,
    pub status: String,
}
