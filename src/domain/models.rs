// Domain models decoupled from the catalog wire format

/// One catalog entry with the bibliographic fields the views consume.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub authors: Vec<String>,
    pub subjects: Vec<String>,
    pub cover_url: Option<String>,
    pub text_url: Option<String>,
}

/// One fetched batch of books at a 1-based page index, in API order.
/// The page size is whatever the API sent; nothing here assumes it.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub index: u32,
    pub records: Vec<Book>,
}
