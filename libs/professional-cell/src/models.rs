use serde::{Deserialize, Serialize};

/// The three catalog filter criteria. `None` or `"all"` on the facet
/// filters means no restriction; an empty search term matches everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFilters {
    pub search: Option<String>,
    pub specialty: Option<String>,
    pub modality: Option<String>,
}

// Error types specific to catalog operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CatalogError {
    NotFound,
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::NotFound => write!(f, "Professional not found"),
        }
    }
}

impl std::error::Error for CatalogError {}
