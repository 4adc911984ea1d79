pub mod appointment;
pub mod content;
pub mod error;
pub mod professional;

pub use appointment::{Appointment, AppointmentStatus};
pub use content::{ContentItem, ContentType};
pub use error::AppError;
pub use professional::{Professional, ProfessionalReview};
