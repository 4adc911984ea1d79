use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The fixed list of bookable session start times. Every booking must name
/// one of these slots.
pub const AVAILABLE_TIMES: [&str; 9] = [
    "09:00", "10:00", "11:00", "12:00", "14:00", "15:00", "16:00", "17:00", "18:00",
];

/// An appointment draft: everything the booking dialog collects.
///
/// `reason` is accepted but intentionally not persisted on the appointment
/// record, which carries only the snapshot fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    pub professional_id: Uuid,
    pub date: NaiveDate,
    pub time: String,
    pub modality: String,
    pub reason: Option<String>,
}

/// Stand-in for the fire-and-forget toast surface: the user-visible
/// confirmation returned alongside a successful booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AppointmentStats {
    pub upcoming: usize,
    pub completed: usize,
    pub cancelled: usize,
    pub total: usize,
}

// Error types specific to appointment operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppointmentError {
    NotFound,
    ProfessionalNotFound,
    MissingTime,
    DateInPast,
    InvalidTimeSlot(String),
    UnsupportedModality(String),
}

impl std::fmt::Display for AppointmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppointmentError::NotFound => write!(f, "Appointment not found"),
            AppointmentError::ProfessionalNotFound => write!(f, "Professional not found"),
            AppointmentError::MissingTime => {
                write!(f, "A time slot must be selected before confirming the booking")
            }
            AppointmentError::DateInPast => {
                write!(f, "Appointments can only be booked for today or a later date")
            }
            AppointmentError::InvalidTimeSlot(time) => {
                write!(f, "'{}' is not one of the bookable time slots", time)
            }
            AppointmentError::UnsupportedModality(modality) => {
                write!(f, "This professional does not offer '{}' sessions", modality)
            }
        }
    }
}

impl std::error::Error for AppointmentError {}
