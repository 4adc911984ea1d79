use shared_models::{Appointment, ContentItem, Professional, ProfessionalReview};

use crate::collection::MemoryCollection;
use crate::seed;

/// The single state context shared by every cell.
///
/// Replaces module-scoped sample arrays with one explicit store handle so
/// that reads and writes always go through the collection operations. The
/// professional directory and review list are immutable after seeding;
/// appointments and content are mutated by booking, cancellation and
/// favorite toggles.
#[derive(Debug, Default)]
pub struct MarketplaceStore {
    pub professionals: MemoryCollection<Professional>,
    pub reviews: MemoryCollection<ProfessionalReview>,
    pub appointments: MemoryCollection<Appointment>,
    pub content: MemoryCollection<ContentItem>,
}

impl MarketplaceStore {
    /// An empty store, for tests and for running without sample data.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A store seeded with the demo marketplace data set.
    pub fn with_sample_data() -> Self {
        let professionals = seed::sample_professionals();
        let reviews = seed::sample_reviews(&professionals);
        let appointments = seed::sample_appointments(&professionals);
        let content = seed::sample_content();

        Self {
            professionals: MemoryCollection::with_items(professionals),
            reviews: MemoryCollection::with_items(reviews),
            appointments: MemoryCollection::with_items(appointments),
            content: MemoryCollection::with_items(content),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The record types carry no Default; an empty store must still build.
    #[tokio::test]
    async fn empty_store_starts_with_no_records() {
        let store = MarketplaceStore::empty();

        assert!(store.professionals.is_empty().await);
        assert!(store.reviews.is_empty().await);
        assert!(store.appointments.is_empty().await);
        assert!(store.content.is_empty().await);
    }

    #[tokio::test]
    async fn sample_store_seeds_every_collection() {
        let store = MarketplaceStore::with_sample_data();

        assert_eq!(store.professionals.len().await, 6);
        assert_eq!(store.reviews.len().await, 18);
        assert_eq!(store.appointments.len().await, 4);
        assert_eq!(store.content.len().await, 8);
    }
}
