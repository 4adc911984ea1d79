use std::sync::Arc;

use axum::{routing::get, Router};

use shared_store::MarketplaceStore;

use crate::handlers;

pub fn professional_routes(store: Arc<MarketplaceStore>) -> Router {
    Router::new()
        .route("/search", get(handlers::search_professionals))
        .route("/specialties", get(handlers::list_specialties))
        .route("/{professional_id}", get(handlers::get_professional))
        .route("/{professional_id}/reviews", get(handlers::get_professional_reviews))
        .with_state(store)
}
