use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use shared_models::{Appointment, AppointmentStatus};
use shared_store::MarketplaceStore;

use crate::models::{
    AppointmentError, BookAppointmentRequest, BookingConfirmation, AVAILABLE_TIMES,
};

pub struct BookingService {
    store: Arc<MarketplaceStore>,
}

impl BookingService {
    pub fn new(store: &Arc<MarketplaceStore>) -> Self {
        Self {
            store: Arc::clone(store),
        }
    }

    /// Validates an appointment draft and appends the booked appointment.
    ///
    /// The rules mirror what the booking dialog enforced client-side: the
    /// professional must exist, the date must be today or later, the time
    /// must be one of the fixed slots and the modality one the professional
    /// offers. There is no overlap check against existing appointments.
    pub async fn book_appointment(
        &self,
        request: BookAppointmentRequest,
    ) -> Result<(Appointment, BookingConfirmation), AppointmentError> {
        info!(
            "Booking appointment with professional {} on {} at {}",
            request.professional_id, request.date, request.time
        );

        let professional = self
            .store
            .professionals
            .find(|professional| professional.id == request.professional_id)
            .await
            .ok_or(AppointmentError::ProfessionalNotFound)?;

        if request.time.is_empty() {
            return Err(AppointmentError::MissingTime);
        }
        if request.date < Utc::now().date_naive() {
            warn!("Rejected booking for past date {}", request.date);
            return Err(AppointmentError::DateInPast);
        }
        if !AVAILABLE_TIMES.contains(&request.time.as_str()) {
            return Err(AppointmentError::InvalidTimeSlot(request.time));
        }
        if !professional.supports_modality(&request.modality) {
            return Err(AppointmentError::UnsupportedModality(request.modality));
        }

        let appointment = Appointment {
            id: Uuid::new_v4(),
            professional: professional.name.clone(),
            specialty: professional.specialty.clone(),
            date: request.date,
            time: request.time.clone(),
            modality: request.modality,
            avatar: professional.avatar.clone(),
            status: AppointmentStatus::Upcoming,
            created_at: Utc::now(),
        };

        self.store.appointments.insert(appointment.clone()).await;

        let confirmation = BookingConfirmation {
            title: "¡Cita reservada!".to_string(),
            description: format!(
                "Tu cita con {} ha sido confirmada para el {} a las {}.",
                professional.name,
                spanish_long_date(request.date),
                request.time
            ),
        };

        info!("Appointment {} booked with {}", appointment.id, professional.name);
        Ok((appointment, confirmation))
    }

    /// Cancels an upcoming appointment. Cancelling a record that is already
    /// cancelled or completed is an idempotent no-op; the record is returned
    /// unchanged and never deleted.
    pub async fn cancel_appointment(&self, id: Uuid) -> Result<Appointment, AppointmentError> {
        let appointment = self
            .store
            .appointments
            .find(|appointment| appointment.id == id)
            .await
            .ok_or(AppointmentError::NotFound)?;

        if !appointment.is_upcoming() {
            info!("Cancel request for non-upcoming appointment {} is a no-op", id);
            return Ok(appointment);
        }

        let cancelled = self
            .store
            .appointments
            .update_first(
                |appointment| appointment.id == id,
                |appointment| appointment.status = AppointmentStatus::Cancelled,
            )
            .await
            .ok_or(AppointmentError::NotFound)?;

        info!("Appointment {} cancelled", id);
        Ok(cancelled)
    }
}

/// Long-form Spanish date, e.g. "lunes, 20 de octubre", matching the
/// confirmation wording of the booking toast.
pub(crate) fn spanish_long_date(date: NaiveDate) -> String {
    const WEEKDAYS: [&str; 7] = [
        "lunes", "martes", "miércoles", "jueves", "viernes", "sábado", "domingo",
    ];
    const MONTHS: [&str; 12] = [
        "enero",
        "febrero",
        "marzo",
        "abril",
        "mayo",
        "junio",
        "julio",
        "agosto",
        "septiembre",
        "octubre",
        "noviembre",
        "diciembre",
    ];

    let weekday = WEEKDAYS[date.weekday().num_days_from_monday() as usize];
    let month = MONTHS[date.month0() as usize];
    format!("{}, {} de {}", weekday, date.day(), month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_spanish_long_dates() {
        // 2025-10-20 was a Monday.
        let date = NaiveDate::from_ymd_opt(2025, 10, 20).unwrap();
        assert_eq!(spanish_long_date(date), "lunes, 20 de octubre");

        let date = NaiveDate::from_ymd_opt(2026, 1, 4).unwrap();
        assert_eq!(spanish_long_date(date), "domingo, 4 de enero");
    }
}
