pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{ContentError, LibraryFilters, CATEGORIES};
pub use router::content_routes;
pub use services::LibraryService;
