use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A booked session with a professional.
///
/// The professional's name, specialty and avatar are denormalized snapshots
/// taken at booking time rather than a live reference, so a later rename of
/// the professional would not rewrite appointment history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub professional: String,
    pub specialty: String,
    pub date: NaiveDate,
    pub time: String,
    pub modality: String,
    pub avatar: String,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    pub fn is_upcoming(&self) -> bool {
        self.status == AppointmentStatus::Upcoming
    }
}

/// Upcoming transitions to cancelled via user action; completed records
/// exist only in seed data, no transition produces them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Upcoming,
    Completed,
    Cancelled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Upcoming => write!(f, "upcoming"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}
