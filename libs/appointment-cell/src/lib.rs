pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{
    AppointmentError, AppointmentStats, BookAppointmentRequest, BookingConfirmation,
    AVAILABLE_TIMES,
};
pub use router::appointment_routes;
pub use services::{BookingService, CalendarService};
