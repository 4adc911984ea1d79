use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;
use shared_store::MarketplaceStore;

use crate::models::{CatalogError, CatalogFilters};
use crate::services::CatalogService;

#[derive(Debug, Deserialize)]
pub struct ProfessionalSearchQuery {
    pub q: Option<String>,
    pub specialty: Option<String>,
    pub modality: Option<String>,
}

#[axum::debug_handler]
pub async fn search_professionals(
    State(store): State<Arc<MarketplaceStore>>,
    Query(query): Query<ProfessionalSearchQuery>,
) -> Result<Json<Value>, AppError> {
    let catalog = CatalogService::new(&store);

    let filters = CatalogFilters {
        search: query.q,
        specialty: query.specialty,
        modality: query.modality,
    };

    let professionals = catalog.search(filters).await;

    Ok(Json(json!({
        "professionals": professionals,
        "total": professionals.len()
    })))
}

#[axum::debug_handler]
pub async fn get_professional(
    State(store): State<Arc<MarketplaceStore>>,
    Path(professional_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let catalog = CatalogService::new(&store);

    let professional = catalog
        .get_professional(professional_id)
        .await
        .map_err(|_| AppError::NotFound("Professional not found".to_string()))?;

    Ok(Json(json!(professional)))
}

#[axum::debug_handler]
pub async fn list_specialties(
    State(store): State<Arc<MarketplaceStore>>,
) -> Result<Json<Value>, AppError> {
    let catalog = CatalogService::new(&store);
    let specialties = catalog.list_specialties().await;

    Ok(Json(json!({
        "specialties": specialties,
        "total": specialties.len()
    })))
}

#[axum::debug_handler]
pub async fn get_professional_reviews(
    State(store): State<Arc<MarketplaceStore>>,
    Path(professional_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let catalog = CatalogService::new(&store);

    let reviews = catalog.get_reviews(professional_id).await.map_err(|e| match e {
        CatalogError::NotFound => AppError::NotFound("Professional not found".to_string()),
    })?;

    Ok(Json(json!({
        "reviews": reviews,
        "professional_id": professional_id,
        "total": reviews.len()
    })))
}
