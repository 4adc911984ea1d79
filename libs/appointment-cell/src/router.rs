use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use shared_store::MarketplaceStore;

use crate::handlers;

pub fn appointment_routes(store: Arc<MarketplaceStore>) -> Router {
    Router::new()
        .route("/", get(handlers::list_appointments).post(handlers::book_appointment))
        .route("/upcoming", get(handlers::upcoming_appointments))
        .route("/calendar", get(handlers::appointments_on_date))
        .route("/stats", get(handlers::appointment_stats))
        .route("/slots", get(handlers::available_slots))
        .route("/{appointment_id}/cancel", patch(handlers::cancel_appointment))
        .with_state(store)
}
