//! Request payloads for create and update operations.
//!
//! Updates are full-row overwrites: every field is written on each call, so
//! the same payload type serves both the insert and the update statement.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ManagerInput {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SchoolInput {
    pub name: String,
    pub location: Option<String>,
    pub principal_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportInput {
    pub title: String,
    pub content: String,
    pub inspector_name: String,
    pub report_date: String,
    pub report_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FollowupInput {
    pub manager_id: Option<i64>,
    pub followup_date: String,
    pub status: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleInput {
    pub recipient: String,
    pub subject: String,
    pub content: String,
    pub scheduled_date: String,
}

/// The score is not part of the payload; it is computed server-side from
/// the submitted counts and persisted alongside them.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductivityInput {
    pub entity_name: String,
    pub entity_type: String,
    pub visits: i64,
    pub reports_submitted: i64,
    pub period: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppointmentInput {
    pub title: String,
    pub description: Option<String>,
    pub appointment_date: String,
    pub location: Option<String>,
    pub attendees: Option<String>,
    #[serde(default = "default_appointment_status")]
    pub status: String,
}

fn default_appointment_status() -> String {
    "scheduled".to_string()
}
