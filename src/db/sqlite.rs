use std::str::FromStr;

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Pool, Sqlite};
use tracing::info;

use crate::db::models::{
    Appointment, EmailLog, Followup, Manager, Productivity, Report, School, SendingSchedule, User,
};
use crate::db::payloads::{
    AppointmentInput, FollowupInput, ManagerInput, ProductivityInput, ReportInput, ScheduleInput,
    SchoolInput,
};
use crate::db::schema::SQLITE_INIT;

pub type SqlitePool = Pool<Sqlite>;

const DEFAULT_ADMIN_USER: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
const DEFAULT_ADMIN_ROLE: &str = "admin";

/// Storage handle wrapping the SQLite pool. Constructed once at startup and
/// passed through router state; every method issues exactly one statement.
#[derive(Clone)]
pub struct Storage {
    pool: SqlitePool,
}

impl Storage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating the file if missing) and return a connected storage.
    /// Foreign keys stay unenforced: deleting a manager must not cascade to
    /// or be blocked by its followups, which survive as orphans.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(false);
        let pool = SqlitePool::connect_with(opts).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), sqlx::Error> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Idempotent seed of the default administrative account. A no-op when
    /// the `admin` row already exists, so re-running at every boot is safe.
    pub async fn ensure_default_account(&self) -> Result<(), sqlx::Error> {
        let exists: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE username = ?")
            .bind(DEFAULT_ADMIN_USER)
            .fetch_optional(&self.pool)
            .await?;
        if exists.is_some() {
            return Ok(());
        }

        let hashed = bcrypt::hash(DEFAULT_ADMIN_PASSWORD, bcrypt::DEFAULT_COST)
            .map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
        sqlx::query("INSERT INTO users (username, password, role) VALUES (?, ?, ?)")
            .bind(DEFAULT_ADMIN_USER)
            .bind(hashed)
            .bind(DEFAULT_ADMIN_ROLE)
            .execute(&self.pool)
            .await?;
        info!(username = DEFAULT_ADMIN_USER, "seeded default account");
        Ok(())
    }

    pub async fn find_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, username, password, role, created_at FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn list_managers(&self) -> Result<Vec<Manager>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM managers ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn insert_manager(&self, input: &ManagerInput) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO managers (name, phone, email, department, notes) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&input.name)
        .bind(&input.phone)
        .bind(&input.email)
        .bind(&input.department)
        .bind(&input.notes)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn update_manager(&self, id: i64, input: &ManagerInput) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE managers SET name = ?, phone = ?, email = ?, department = ?, notes = ? WHERE id = ?",
        )
        .bind(&input.name)
        .bind(&input.phone)
        .bind(&input.email)
        .bind(&input.department)
        .bind(&input.notes)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn delete_manager(&self, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM managers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn list_schools(&self) -> Result<Vec<School>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM schools ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn insert_school(&self, input: &SchoolInput) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO schools (name, location, principal_name, phone, email, notes) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&input.name)
        .bind(&input.location)
        .bind(&input.principal_name)
        .bind(&input.phone)
        .bind(&input.email)
        .bind(&input.notes)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn update_school(&self, id: i64, input: &SchoolInput) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE schools SET name = ?, location = ?, principal_name = ?, phone = ?, email = ?, notes = ? WHERE id = ?",
        )
        .bind(&input.name)
        .bind(&input.location)
        .bind(&input.principal_name)
        .bind(&input.phone)
        .bind(&input.email)
        .bind(&input.notes)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn delete_school(&self, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM schools WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn list_reports(&self) -> Result<Vec<Report>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM reports ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn insert_report(&self, input: &ReportInput) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO reports (title, content, inspector_name, report_date, report_type) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&input.title)
        .bind(&input.content)
        .bind(&input.inspector_name)
        .bind(&input.report_date)
        .bind(&input.report_type)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn delete_report(&self, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM reports WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// List followups newest-first, attaching the referenced manager's name.
    /// LEFT JOIN keeps rows whose manager reference is null or orphaned.
    pub async fn list_followups(&self) -> Result<Vec<Followup>, sqlx::Error> {
        sqlx::query_as(
            r#"SELECT f.id, f.manager_id, f.followup_date, f.status, f.notes, f.created_at,
               m.name AS manager_name
               FROM followups f
               LEFT JOIN managers m ON f.manager_id = m.id
               ORDER BY f.created_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn insert_followup(&self, input: &FollowupInput) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO followups (manager_id, followup_date, status, notes) VALUES (?, ?, ?, ?)",
        )
        .bind(input.manager_id)
        .bind(&input.followup_date)
        .bind(&input.status)
        .bind(&input.notes)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn update_followup(&self, id: i64, input: &FollowupInput) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE followups SET manager_id = ?, followup_date = ?, status = ?, notes = ? WHERE id = ?",
        )
        .bind(input.manager_id)
        .bind(&input.followup_date)
        .bind(&input.status)
        .bind(&input.notes)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn delete_followup(&self, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM followups WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn list_schedules(&self) -> Result<Vec<SendingSchedule>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM sending_schedules ORDER BY scheduled_date DESC")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn insert_schedule(&self, input: &ScheduleInput) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO sending_schedules (recipient, subject, content, scheduled_date) VALUES (?, ?, ?, ?)",
        )
        .bind(&input.recipient)
        .bind(&input.subject)
        .bind(&input.content)
        .bind(&input.scheduled_date)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn delete_schedule(&self, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM sending_schedules WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn list_productivity(&self) -> Result<Vec<Productivity>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM productivity ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn insert_productivity(
        &self,
        input: &ProductivityInput,
        score: f64,
    ) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO productivity (entity_name, entity_type, visits, reports_submitted, score, period) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&input.entity_name)
        .bind(&input.entity_type)
        .bind(input.visits)
        .bind(input.reports_submitted)
        .bind(score)
        .bind(&input.period)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM appointments ORDER BY appointment_date DESC")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn insert_appointment(&self, input: &AppointmentInput) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO appointments (title, description, appointment_date, location, attendees, status) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.appointment_date)
        .bind(&input.location)
        .bind(&input.attendees)
        .bind(&input.status)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn update_appointment(
        &self,
        id: i64,
        input: &AppointmentInput,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE appointments SET title = ?, description = ?, appointment_date = ?, location = ?, attendees = ?, status = ? WHERE id = ?",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.appointment_date)
        .bind(&input.location)
        .bind(&input.attendees)
        .bind(&input.status)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn delete_appointment(&self, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM appointments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Newest 50 log rows; older history stays in the table but is not served.
    pub async fn list_email_logs(&self) -> Result<Vec<EmailLog>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM email_logs ORDER BY sent_at DESC LIMIT 50")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn insert_email_log(
        &self,
        recipient: &str,
        subject: &str,
        body: &str,
    ) -> Result<i64, sqlx::Error> {
        let result =
            sqlx::query("INSERT INTO email_logs (recipient, subject, body) VALUES (?, ?, ?)")
                .bind(recipient)
                .bind(subject)
                .bind(body)
                .execute(&self.pool)
                .await?;
        Ok(result.last_insert_rowid())
    }
}
