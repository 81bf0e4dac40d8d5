use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::mapping::map_dto_to_book;
use crate::domain::models::{Book, Page};

/// Failure of a single catalog request. Never retried; callers decide
/// whether the view keeps its last good data.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("catalog request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("catalog returned {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
    #[error("could not decode catalog response: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Read seam for everything that browses the catalog; the real client
/// implements it, tests substitute a canned source.
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_page(&self, page: u32) -> Result<Page, FetchError>;
    async fn fetch_all(&self) -> Result<Vec<Book>, FetchError>;
    async fn fetch_one(&self, id: i64) -> Result<Book, FetchError>;
}

#[derive(Clone, Debug)]
pub struct CatalogClient {
    base_url: String,
    client: reqwest::Client,
}

impl CatalogClient {
    /// Create a new client with the given base URL (e.g. "https://gutendex.com").
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().build()?;
        let base_url_str = base_url.into();
        tracing::debug!(base_url = %base_url_str, "creating CatalogClient");
        Ok(CatalogClient {
            base_url: base_url_str.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::Transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }
        let body = resp.text().await.map_err(FetchError::Transport)?;
        match serde_json::from_str::<T>(&body) {
            Ok(parsed) => Ok(parsed),
            Err(e) => {
                let snippet = body_snippet(&body);
                tracing::error!(error = %e, body_snippet = %snippet, "failed to parse catalog response");
                Err(FetchError::Decode(e))
            }
        }
    }

    /// GET /books/?page={n}
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn get_page(&self, page: u32) -> Result<ListingResponse, FetchError> {
        let url = self.url(&format!("/books/?page={}", page));
        tracing::debug!(%url, page, "GET books page");
        self.get_json(&url).await
    }

    /// GET /books (the unpaged default listing)
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn get_listing(&self) -> Result<ListingResponse, FetchError> {
        let url = self.url("/books");
        tracing::debug!(%url, "GET books listing");
        self.get_json(&url).await
    }

    /// GET /books/{id}
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn get_book(&self, id: i64) -> Result<BookDto, FetchError> {
        let url = self.url(&format!("/books/{}", id));
        tracing::debug!(%url, id, "GET book");
        self.get_json(&url).await
    }
}

#[async_trait::async_trait]
impl CatalogSource for CatalogClient {
    async fn fetch_page(&self, page: u32) -> Result<Page, FetchError> {
        let listing = self.get_page(page).await?;
        Ok(Page {
            index: page,
            records: listing.results.iter().map(map_dto_to_book).collect(),
        })
    }

    async fn fetch_all(&self) -> Result<Vec<Book>, FetchError> {
        let listing = self.get_listing().await?;
        Ok(listing.results.iter().map(map_dto_to_book).collect())
    }

    async fn fetch_one(&self, id: i64) -> Result<Book, FetchError> {
        let dto = self.get_book(id).await?;
        Ok(map_dto_to_book(&dto))
    }
}

/// First ~2000 bytes of a body for logging, cut on a char boundary so
/// multibyte UTF-8 at the cut point cannot panic the error path.
fn body_snippet(body: &str) -> &str {
    let mut snippet_len = body.len().min(2000);
    while !body.is_char_boundary(snippet_len) {
        snippet_len -= 1;
    }
    &body[..snippet_len]
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct ListingResponse {
    #[serde(default)]
    pub results: Vec<BookDto>,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct BookDto {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<PersonDto>,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub formats: HashMap<String, String>,
    // allow extra fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct PersonDto {
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_handles_slashes() {
        let c = CatalogClient::new("https://gutendex.com/").unwrap();
        assert_eq!(c.url("/books/?page=3"), "https://gutendex.com/books/?page=3");
        assert_eq!(c.url("books/42"), "https://gutendex.com/books/42");
    }

    #[test]
    fn book_deserialize_example() {
        let json = r#"{
            "id": 84,
            "title": "Frankenstein; Or, The Modern Prometheus",
            "authors": [
                { "name": "Shelley, Mary Wollstonecraft", "birth_year": 1797, "death_year": 1851 }
            ],
            "subjects": [
                "Frankenstein's monster (Fictitious character) -- Fiction",
                "Science fiction"
            ],
            "bookshelves": ["Gothic Fiction"],
            "languages": ["en"],
            "copyright": false,
            "media_type": "Text",
            "formats": {
                "image/jpeg": "https://www.gutenberg.org/cache/epub/84/pg84.cover.medium.jpg",
                "application/octet-stream": "https://www.gutenberg.org/files/84/84-0.zip",
                "text/html": "https://www.gutenberg.org/ebooks/84.html.images"
            },
            "download_count": 104393
        }"#;

        let dto: BookDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.id, 84);
        assert_eq!(dto.title, "Frankenstein; Or, The Modern Prometheus");
        assert_eq!(
            dto.authors[0].name.as_deref(),
            Some("Shelley, Mary Wollstonecraft")
        );
        assert_eq!(dto.subjects.len(), 2);
        assert!(dto.formats.contains_key("image/jpeg"));
        // unknown fields land in the flattened map instead of failing
        assert!(dto.extra.contains_key("download_count"));
    }

    #[test]
    fn listing_deserialize_example() {
        let json = r#"{
            "count": 76000,
            "next": "https://gutendex.com/books/?page=2",
            "previous": null,
            "results": [
                { "id": 1, "title": "A", "authors": [], "subjects": [], "formats": {} },
                { "id": 2, "title": "B", "authors": [], "subjects": [], "formats": {} }
            ]
        }"#;

        let listing: ListingResponse = serde_json::from_str(json).unwrap();
        assert_eq!(listing.results.len(), 2);
        assert_eq!(listing.results[1].id, 2);
    }

    #[test]
    fn listing_tolerates_missing_results() {
        let listing: ListingResponse = serde_json::from_str("{}").unwrap();
        assert!(listing.results.is_empty());
    }

    #[test]
    fn body_snippet_backs_off_to_a_char_boundary() {
        // non-JSON body with a multibyte char straddling the 2000-byte cut
        let mut body = "a".repeat(1999);
        body.push('é'); // bytes 1999..2001
        body.push_str(&"a".repeat(100));

        let snippet = body_snippet(&body);
        assert_eq!(snippet.len(), 1999);
        assert!(body.starts_with(snippet));

        assert!(serde_json::from_str::<ListingResponse>(&body).is_err());
    }

    #[test]
    fn body_snippet_keeps_short_bodies_whole() {
        assert_eq!(body_snippet("not json"), "not json");
    }

    #[test]
    fn book_tolerates_missing_optional_fields() {
        let dto: BookDto = serde_json::from_str(r#"{ "id": 7, "title": "Bare" }"#).unwrap();
        assert!(dto.authors.is_empty());
        assert!(dto.subjects.is_empty());
        assert!(dto.formats.is_empty());
    }
}
