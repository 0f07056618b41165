//! Appointment reminder checker.
//!
//! A background task re-fetches the appointment list every 60 seconds and
//! emits one reminder event per appointment inside the (0, 30] minute window
//! whose `notified` flag is unset. The flag is never written back, so a
//! qualifying appointment re-triggers on every cycle; that mirrors the
//! upstream behavior and stands as an open question for the requirements
//! owner, not something to fix here.
//!
//! A separate 60-minute `is_upcoming` window exists purely for visual
//! highlighting of rows. The two windows are intentionally different and
//! must not be unified.

use std::time::Duration;

use chrono::{DateTime, Local, NaiveDateTime};
use tokio::time::interval;
use tracing::{info, warn};

use crate::db::Storage;
use crate::db::models::Appointment;

pub const CHECK_PERIOD: Duration = Duration::from_secs(60);

/// Reminder window in minutes, exclusive below and inclusive above.
const REMINDER_WINDOW_MINUTES: f64 = 30.0;

/// Highlighting window in minutes; wider than the reminder window.
const UPCOMING_WINDOW_MINUTES: f64 = 60.0;

/// Parse an appointment timestamp as entered through the forms.
/// Accepts RFC 3339 as well as the bare local `YYYY-MM-DDTHH:MM[:SS]`
/// shapes a datetime picker produces (with either `T` or space).
pub fn parse_appointment_date(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    for fmt in [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    None
}

fn minutes_until(when: NaiveDateTime, now: NaiveDateTime) -> f64 {
    (when - now).num_seconds() as f64 / 60.0
}

/// Whether a reminder fires for this appointment at `now`: strictly in the
/// future, at most 30 minutes out, and not already flagged. Unparsable
/// dates never fire.
pub fn is_due(appointment: &Appointment, now: NaiveDateTime) -> bool {
    if appointment.notified {
        return false;
    }
    match parse_appointment_date(&appointment.appointment_date) {
        Some(when) => {
            let diff = minutes_until(when, now);
            diff > 0.0 && diff <= REMINDER_WINDOW_MINUTES
        }
        None => {
            warn!(
                id = appointment.id,
                raw = %appointment.appointment_date,
                "skipping appointment with unparsable date"
            );
            false
        }
    }
}

/// Row-highlighting predicate: within the next 60 minutes. Independent of
/// the reminder window and of the `notified` flag.
pub fn is_upcoming(raw_date: &str, now: NaiveDateTime) -> bool {
    match parse_appointment_date(raw_date) {
        Some(when) => {
            let diff = minutes_until(when, now);
            diff > 0.0 && diff <= UPCOMING_WINDOW_MINUTES
        }
        None => false,
    }
}

/// One evaluation cycle over a fetched list: each qualifying appointment is
/// returned exactly once.
pub fn due_reminders(appointments: &[Appointment], now: NaiveDateTime) -> Vec<&Appointment> {
    appointments.iter().filter(|a| is_due(a, now)).collect()
}

/// Periodic checker. Runs until process shutdown; a failed fetch is logged
/// and the next tick retries from scratch.
pub async fn run(store: Storage) {
    let mut ticker = interval(CHECK_PERIOD);
    loop {
        ticker.tick().await;
        let appointments = match store.list_appointments().await {
            Ok(list) => list,
            Err(e) => {
                warn!(error = %e, "reminder check could not fetch appointments");
                continue;
            }
        };
        let now = Local::now().naive_local();
        for appointment in due_reminders(&appointments, now) {
            info!(
                id = appointment.id,
                title = %appointment.title,
                at = %appointment.appointment_date,
                location = appointment.location.as_deref().unwrap_or("-"),
                "appointment within 30 minutes"
            );
        }
    }
}
