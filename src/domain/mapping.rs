// Mapping from catalog DTOs to domain models

use crate::catalog::BookDto;
use crate::domain::models::Book;

/// Format key the API uses for the cover image.
pub const COVER_FORMAT: &str = "image/jpeg";
/// Format key the API uses for the plain-text download.
pub const TEXT_FORMAT: &str = "application/octet-stream";

pub fn map_dto_to_book(dto: &BookDto) -> Book {
    let authors = dto
        .authors
        .iter()
        .filter_map(|a| a.name.clone())
        .collect();

    Book {
        id: dto.id,
        title: dto.title.clone(),
        authors,
        subjects: dto.subjects.clone(),
        cover_url: dto.formats.get(COVER_FORMAT).cloned(),
        text_url: dto.formats.get(TEXT_FORMAT).cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto_from_json(json: &str) -> BookDto {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn maps_formats_to_urls() {
        let dto = dto_from_json(
            r#"{
                "id": 84,
                "title": "Frankenstein",
                "authors": [{ "name": "Shelley, Mary Wollstonecraft" }],
                "subjects": ["Science fiction"],
                "formats": {
                    "image/jpeg": "https://example.org/84.jpg",
                    "application/octet-stream": "https://example.org/84.zip"
                }
            }"#,
        );

        let book = map_dto_to_book(&dto);
        assert_eq!(book.id, 84);
        assert_eq!(book.cover_url.as_deref(), Some("https://example.org/84.jpg"));
        assert_eq!(book.text_url.as_deref(), Some("https://example.org/84.zip"));
        assert_eq!(book.authors, vec!["Shelley, Mary Wollstonecraft"]);
    }

    #[test]
    fn missing_formats_map_to_none() {
        let dto = dto_from_json(r#"{ "id": 7, "title": "Bare" }"#);
        let book = map_dto_to_book(&dto);
        assert!(book.cover_url.is_none());
        assert!(book.text_url.is_none());
        assert!(book.authors.is_empty());
        assert!(book.subjects.is_empty());
    }

    #[test]
    fn authors_without_names_are_skipped() {
        let dto = dto_from_json(
            r#"{ "id": 9, "title": "T", "authors": [{ "name": null }, { "name": "Real" }] }"#,
        );
        let book = map_dto_to_book(&dto);
        assert_eq!(book.authors, vec!["Real"]);
    }
}
