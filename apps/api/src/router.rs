use std::sync::Arc;

use axum::{routing::get, Router};

use appointment_cell::router::appointment_routes;
use content_cell::router::content_routes;
use professional_cell::router::professional_routes;
use shared_store::MarketplaceStore;

pub fn create_router(store: Arc<MarketplaceStore>) -> Router {
    Router::new()
        .route("/", get(|| async { "MindCare API is running!" }))
        .nest("/professionals", professional_routes(store.clone()))
        .nest("/appointments", appointment_routes(store.clone()))
        .nest("/content", content_routes(store))
}
