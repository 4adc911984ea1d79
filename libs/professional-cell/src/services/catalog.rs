use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use shared_models::{Professional, ProfessionalReview};
use shared_store::MarketplaceStore;

use crate::models::{CatalogError, CatalogFilters};

pub struct CatalogService {
    store: Arc<MarketplaceStore>,
}

impl CatalogService {
    pub fn new(store: &Arc<MarketplaceStore>) -> Self {
        Self {
            store: Arc::clone(store),
        }
    }

    /// Filters the directory by free text, specialty and modality.
    ///
    /// Results are a subsequence of the directory in source order; there is
    /// no ranking, and an empty result is a valid outcome rather than an
    /// error.
    pub async fn search(&self, filters: CatalogFilters) -> Vec<Professional> {
        let term = filters.search.clone().unwrap_or_default();

        let results = self
            .store
            .professionals
            .filter(|professional| {
                let matches_text = professional.matches_search(&term);
                let matches_specialty = match filters.specialty.as_deref() {
                    None | Some("all") => true,
                    Some(specialty) => professional.specialty == specialty,
                };
                let matches_modality = match filters.modality.as_deref() {
                    None | Some("all") => true,
                    Some(modality) => professional.supports_modality(modality),
                };
                matches_text && matches_specialty && matches_modality
            })
            .await;

        debug!(
            "Catalog search matched {} professionals (filters: {:?})",
            results.len(),
            filters
        );
        results
    }

    pub async fn get_professional(&self, id: Uuid) -> Result<Professional, CatalogError> {
        self.store
            .professionals
            .find(|professional| professional.id == id)
            .await
            .ok_or(CatalogError::NotFound)
    }

    /// Distinct specialty labels in directory order, for the filter dropdown.
    pub async fn list_specialties(&self) -> Vec<String> {
        let mut specialties: Vec<String> = Vec::new();
        for professional in self.store.professionals.snapshot().await {
            if !specialties.contains(&professional.specialty) {
                specialties.push(professional.specialty);
            }
        }
        specialties
    }

    pub async fn get_reviews(&self, id: Uuid) -> Result<Vec<ProfessionalReview>, CatalogError> {
        // Unknown professionals are a 404, not an empty review list.
        self.get_professional(id).await?;

        Ok(self
            .store
            .reviews
            .filter(|review| review.professional_id == id)
            .await)
    }
}
