//! Document listing filters.

use serde::{Deserialize, Serialize};

use docflow_core::types::CategoryId;
use docflow_entity::document::Document;

/// Filters for listing a user's documents.
///
/// `category_id` is an exact match. `search` is a case-insensitive
/// literal substring matched against the title, the original file name,
/// and each tag; any one of them matching is enough.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentQuery {
    /// Restrict to one category.
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    /// Search term.
    #[serde(default)]
    pub search: Option<String>,
}

impl DocumentQuery {
    /// The search term, lowercased, if one was given. An empty term means no search.
    pub fn needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase)
    }
}

/// Whether `document` matches a lowercased search `needle`.
pub fn matches_search(document: &Document, needle: &str) -> bool {
    let hit = |field: &str| field.to_lowercase().contains(needle);
    hit(document.title.as_str())
        || hit(document.file_name.as_str())
        || document.tags.iter().any(|t| hit(t.as_str()))
}
