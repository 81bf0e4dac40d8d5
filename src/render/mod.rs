// Pure projection of books into display items. No state, no side effects.

use crate::domain::models::Book;
use crate::favorites::FavoritesStore;

const UNKNOWN: &str = "Unknown";

/// Renderer-ready view of one book.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayItem {
    pub title: String,
    pub author_name: String,
    pub genre: String,
    pub cover_url: Option<String>,
    pub detail_link_id: i64,
    pub is_favorite: bool,
}

pub fn project_one(book: &Book, favorites: &FavoritesStore) -> DisplayItem {
    DisplayItem {
        title: book.title.clone(),
        author_name: book
            .authors
            .first()
            .cloned()
            .unwrap_or_else(|| UNKNOWN.to_string()),
        genre: book
            .subjects
            .first()
            .cloned()
            .unwrap_or_else(|| UNKNOWN.to_string()),
        cover_url: book.cover_url.clone(),
        detail_link_id: book.id,
        is_favorite: favorites.is_favorite(book.id),
    }
}

pub fn project<'a>(
    books: impl IntoIterator<Item = &'a Book>,
    favorites: &FavoritesStore,
) -> Vec<DisplayItem> {
    books
        .into_iter()
        .map(|book| project_one(book, favorites))
        .collect()
}
