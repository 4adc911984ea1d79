use serde::{Deserialize, Serialize};
use shared_models::ContentType;

/// The fixed category labels shown as filter chips.
pub const CATEGORIES: [&str; 6] = [
    "Ansiedad",
    "Sueño",
    "Autoestima",
    "Mindfulness",
    "Estrés",
    "Productividad",
];

/// Library filter criteria: free text over title+description, category
/// exact-or-wildcard, plus the optional per-type tab facet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibraryFilters {
    pub search: Option<String>,
    pub category: Option<String>,
    pub content_type: Option<ContentType>,
}

// Error types specific to library operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ContentError {
    NotFound,
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentError::NotFound => write!(f, "Content item not found"),
        }
    }
}

impl std::error::Error for ContentError {}
