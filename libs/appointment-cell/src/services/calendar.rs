use std::sync::Arc;

use chrono::NaiveDate;

use shared_models::{Appointment, AppointmentStatus};
use shared_store::MarketplaceStore;

use crate::models::AppointmentStats;

pub struct CalendarService {
    store: Arc<MarketplaceStore>,
}

impl CalendarService {
    pub fn new(store: &Arc<MarketplaceStore>) -> Self {
        Self {
            store: Arc::clone(store),
        }
    }

    /// The full ordered sequence, optionally narrowed to one status.
    pub async fn list_appointments(&self, status: Option<AppointmentStatus>) -> Vec<Appointment> {
        match status {
            None => self.store.appointments.snapshot().await,
            Some(status) => {
                self.store
                    .appointments
                    .filter(|appointment| appointment.status == status)
                    .await
            }
        }
    }

    /// Upcoming appointments ascending by date. The sort is stable, so
    /// same-day appointments keep their booking order.
    pub async fn upcoming_appointments(&self) -> Vec<Appointment> {
        let mut upcoming = self
            .store
            .appointments
            .filter(|appointment| appointment.is_upcoming())
            .await;
        upcoming.sort_by_key(|appointment| appointment.date);
        upcoming
    }

    /// All appointments on one calendar date, any status. Date-only
    /// comparison, not time-zone aware.
    pub async fn appointments_on(&self, date: NaiveDate) -> Vec<Appointment> {
        self.store
            .appointments
            .filter(|appointment| appointment.date == date)
            .await
    }

    /// Counts for the calendar summary panel.
    pub async fn stats(&self) -> AppointmentStats {
        let appointments = self.store.appointments.snapshot().await;
        let count = |status: AppointmentStatus| {
            appointments
                .iter()
                .filter(|appointment| appointment.status == status)
                .count()
        };

        AppointmentStats {
            upcoming: count(AppointmentStatus::Upcoming),
            completed: count(AppointmentStatus::Completed),
            cancelled: count(AppointmentStatus::Cancelled),
            total: appointments.len(),
        }
    }
}
