use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;
use shared_models::ContentType;
use shared_store::MarketplaceStore;

use crate::models::{ContentError, LibraryFilters, CATEGORIES};
use crate::services::LibraryService;

#[derive(Debug, Deserialize)]
pub struct ContentSearchQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub content_type: Option<ContentType>,
}

#[axum::debug_handler]
pub async fn search_content(
    State(store): State<Arc<MarketplaceStore>>,
    Query(query): Query<ContentSearchQuery>,
) -> Result<Json<Value>, AppError> {
    let library = LibraryService::new(&store);

    let filters = LibraryFilters {
        search: query.q,
        category: query.category,
        content_type: query.content_type,
    };

    let items = library.search(filters).await;

    Ok(Json(json!({
        "content": items,
        "total": items.len()
    })))
}

#[axum::debug_handler]
pub async fn list_categories(
    State(_store): State<Arc<MarketplaceStore>>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(json!({
        "categories": CATEGORIES,
        "total": CATEGORIES.len()
    })))
}

#[axum::debug_handler]
pub async fn list_favorites(
    State(store): State<Arc<MarketplaceStore>>,
) -> Result<Json<Value>, AppError> {
    let library = LibraryService::new(&store);
    let favorites = library.favorites().await;

    Ok(Json(json!({
        "content": favorites,
        "total": favorites.len()
    })))
}

#[axum::debug_handler]
pub async fn toggle_favorite(
    State(store): State<Arc<MarketplaceStore>>,
    Path(content_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let library = LibraryService::new(&store);

    let item = library.toggle_favorite(content_id).await.map_err(|e| match e {
        ContentError::NotFound => AppError::NotFound("Content item not found".to_string()),
    })?;

    Ok(Json(json!(item)))
}
