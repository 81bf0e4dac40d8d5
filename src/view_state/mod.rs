// View state for the paged catalog: one page of books in memory, filters
// applied on top of it, and a ticket guard against stale fetch results.

use crate::catalog::{CatalogSource, FetchError};
use crate::domain::models::{Book, Page};
use crate::indicator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Handle for one in-flight fetch. Completing with an outdated ticket is
/// a no-op, so overlapping fetches cannot clobber a newer page.
#[derive(Debug, Clone, Copy)]
pub struct FetchTicket {
    seq: u64,
    page: u32,
}

#[derive(Debug)]
pub struct ViewState {
    fetch_state: FetchState,
    page_index: u32,
    search: String,
    genre: String,
    records: Vec<Book>,
    seq: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        ViewState {
            fetch_state: FetchState::Idle,
            page_index: 1,
            search: String::new(),
            genre: String::new(),
            records: Vec::new(),
            seq: 0,
        }
    }

    /// Start a fetch for the given 1-based page. Page 0 is rejected
    /// without issuing a ticket.
    pub fn begin_fetch(&mut self, page: u32) -> Option<FetchTicket> {
        if page < 1 {
            return None;
        }
        self.seq += 1;
        self.fetch_state = FetchState::Loading;
        Some(FetchTicket {
            seq: self.seq,
            page,
        })
    }

    /// Apply a fetch outcome. Results for superseded tickets are dropped.
    /// On failure the last good page is retained for display.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, result: Result<Page, FetchError>) {
        if ticket.seq != self.seq {
            tracing::debug!(page = ticket.page, "discarding stale fetch result");
            return;
        }
        match result {
            Ok(page) => {
                tracing::debug!(page = page.index, count = page.records.len(), "page loaded");
                self.records = page.records;
                self.page_index = page.index;
                self.fetch_state = FetchState::Loaded;
            }
            Err(e) => {
                tracing::error!(page = ticket.page, error = %e, "page fetch failed");
                self.fetch_state = FetchState::Failed;
            }
        }
    }

    /// Filter change only; never touches fetch state or the stored page.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub fn set_genre(&mut self, text: impl Into<String>) {
        self.genre = text.into();
    }

    /// The current page filtered by search text (case-insensitive
    /// substring on the title) and genre (substring on any subject),
    /// in the order the API returned the records.
    pub fn visible_records(&self) -> Vec<&Book> {
        let needle = self.search.to_lowercase();
        self.records
            .iter()
            .filter(|book| {
                let matches_search =
                    needle.is_empty() || book.title.to_lowercase().contains(&needle);
                let matches_genre = self.genre.is_empty()
                    || book.subjects.iter().any(|s| s.contains(&self.genre));
                matches_search && matches_genre
            })
            .collect()
    }

    pub fn fetch_state(&self) -> FetchState {
        self.fetch_state
    }

    pub fn page_index(&self) -> u32 {
        self.page_index
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }
}

/// Couples the view state to a catalog source and drives page fetches.
pub struct CatalogBrowser<S: CatalogSource> {
    source: S,
    pub state: ViewState,
}

impl<S: CatalogSource> CatalogBrowser<S> {
    pub fn new(source: S) -> Self {
        CatalogBrowser {
            source,
            state: ViewState::new(),
        }
    }

    /// Fetch and install the given page. Requests below page 1 are
    /// no-ops. The loading indicator is released on every exit path.
    pub async fn set_page(&mut self, page: u32) {
        let Some(ticket) = self.state.begin_fetch(page) else {
            return;
        };
        let _loading = indicator::begin();
        let result = self.source.fetch_page(page).await;
        self.state.complete_fetch(ticket, result);
    }

    pub async fn next_page(&mut self) {
        self.set_page(self.state.page_index() + 1).await;
    }

    /// Silent no-op on page 1.
    pub async fn prev_page(&mut self) {
        let current = self.state.page_index();
        if current > 1 {
            self.set_page(current - 1).await;
        }
    }
}
