use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use shared_models::ContentItem;
use shared_store::MarketplaceStore;

use crate::models::{ContentError, LibraryFilters};

pub struct LibraryService {
    store: Arc<MarketplaceStore>,
}

impl LibraryService {
    pub fn new(store: &Arc<MarketplaceStore>) -> Self {
        Self {
            store: Arc::clone(store),
        }
    }

    /// Filters the library by free text, category and type, preserving
    /// source order. Empty results are valid.
    pub async fn search(&self, filters: LibraryFilters) -> Vec<ContentItem> {
        let term = filters.search.clone().unwrap_or_default();

        let results = self
            .store
            .content
            .filter(|item| {
                let matches_text = item.matches_search(&term);
                let matches_category = match filters.category.as_deref() {
                    None | Some("all") => true,
                    Some(category) => item.category == category,
                };
                let matches_type = match filters.content_type {
                    None => true,
                    Some(content_type) => item.content_type == content_type,
                };
                matches_text && matches_category && matches_type
            })
            .await;

        debug!("Library search matched {} items (filters: {:?})", results.len(), filters);
        results
    }

    /// The subsequence of items currently flagged as favorites.
    pub async fn favorites(&self) -> Vec<ContentItem> {
        self.store.content.filter(|item| item.is_favorite).await
    }

    /// Flips the favorite flag on exactly one item. Toggling twice restores
    /// the original value.
    pub async fn toggle_favorite(&self, id: Uuid) -> Result<ContentItem, ContentError> {
        let updated = self
            .store
            .content
            .update_first(
                |item| item.id == id,
                |item| item.is_favorite = !item.is_favorite,
            )
            .await
            .ok_or(ContentError::NotFound)?;

        info!(
            "Content {} favorite flag is now {}",
            updated.id, updated.is_favorite
        );
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_models::ContentType;
    use shared_store::MarketplaceStore;

    fn seeded_library() -> LibraryService {
        let store = Arc::new(MarketplaceStore::with_sample_data());
        LibraryService::new(&store)
    }

    #[tokio::test]
    async fn wildcard_filters_are_the_identity() {
        let library = seeded_library();
        let all = library.search(LibraryFilters::default()).await;
        assert_eq!(all.len(), 8);

        let wildcards = library
            .search(LibraryFilters {
                search: Some(String::new()),
                category: Some("all".to_string()),
                content_type: None,
            })
            .await;
        assert_eq!(wildcards.len(), all.len());
    }

    #[tokio::test]
    async fn search_covers_title_and_description() {
        let library = seeded_library();

        let by_title = library
            .search(LibraryFilters {
                search: Some("respiración".to_string()),
                ..Default::default()
            })
            .await;
        assert!(!by_title.is_empty());

        let by_description = library
            .search(LibraryFilters {
                search: Some("DESCANSO NOCTURNO".to_string()),
                ..Default::default()
            })
            .await;
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].title, "Meditación guiada para dormir mejor");
    }

    #[tokio::test]
    async fn category_and_type_facets_compose() {
        let library = seeded_library();
        let results = library
            .search(LibraryFilters {
                category: Some("Ansiedad".to_string()),
                content_type: Some(ContentType::Exercise),
                ..Default::default()
            })
            .await;

        assert_eq!(results.len(), 1);
        assert_eq!(
            results[0].title,
            "Ejercicio de relajación muscular progresiva"
        );
    }

    #[tokio::test]
    async fn toggle_flips_exactly_one_item_and_round_trips() {
        let library = seeded_library();
        let all = library.search(LibraryFilters::default()).await;
        let target = all[0].clone();
        let others: Vec<_> = all[1..].iter().map(|i| (i.id, i.is_favorite)).collect();

        let flipped = library.toggle_favorite(target.id).await.unwrap();
        assert_eq!(flipped.is_favorite, !target.is_favorite);

        let after: Vec<_> = library
            .search(LibraryFilters::default())
            .await
            .into_iter()
            .skip(1)
            .map(|i| (i.id, i.is_favorite))
            .collect();
        assert_eq!(after, others);

        let restored = library.toggle_favorite(target.id).await.unwrap();
        assert_eq!(restored.is_favorite, target.is_favorite);
    }

    #[tokio::test]
    async fn favorites_view_tracks_the_flag() {
        let library = seeded_library();
        let before = library.favorites().await;
        assert_eq!(before.len(), 2);

        let all = library.search(LibraryFilters::default()).await;
        let plain = all.iter().find(|item| !item.is_favorite).unwrap();
        library.toggle_favorite(plain.id).await.unwrap();

        assert_eq!(library.favorites().await.len(), before.len() + 1);
    }

    #[tokio::test]
    async fn toggle_unknown_id_is_not_found() {
        let library = seeded_library();
        let result = library.toggle_favorite(Uuid::new_v4()).await;
        assert!(matches!(result, Err(ContentError::NotFound)));
    }
}
