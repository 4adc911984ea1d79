use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A verified mental-health professional listed in the marketplace catalog.
///
/// Directory entries are immutable sample data: they are seeded at startup
/// and never mutated at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Professional {
    pub id: Uuid,
    pub name: String,
    pub specialty: String,
    pub description: String,
    pub rating: f32,
    pub reviews: i32,
    pub price: i32,
    pub location: String,
    pub modality: Vec<String>,
    pub avatar: String,
    pub experience: i32,
    pub availability: String,
}

impl Professional {
    /// Case-insensitive substring match against name or specialty.
    /// An empty search term matches every entry.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.specialty.to_lowercase().contains(&term)
    }

    pub fn supports_modality(&self, modality: &str) -> bool {
        self.modality.iter().any(|m| m == modality)
    }
}

/// A patient review attached to a professional's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfessionalReview {
    pub id: Uuid,
    pub professional_id: Uuid,
    pub author: String,
    pub rating: i32,
    pub posted: String,
    pub comment: String,
}
