use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A self-care resource in the content library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub category: String,
    pub duration: String,
    pub image: String,
    pub is_favorite: bool,
}

impl ContentItem {
    /// Case-insensitive substring match against title or description.
    /// An empty search term matches every item.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Article,
    Video,
    Podcast,
    Exercise,
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentType::Article => write!(f, "article"),
            ContentType::Video => write!(f, "video"),
            ContentType::Podcast => write!(f, "podcast"),
            ContentType::Exercise => write!(f, "exercise"),
        }
    }
}
