use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use shared_store::MarketplaceStore;

use crate::handlers;

pub fn content_routes(store: Arc<MarketplaceStore>) -> Router {
    Router::new()
        .route("/", get(handlers::search_content))
        .route("/categories", get(handlers::list_categories))
        .route("/favorites", get(handlers::list_favorites))
        .route("/{content_id}/favorite", patch(handlers::toggle_favorite))
        .with_state(store)
}
