// Persisted wishlist: a set of favorited book ids backed by one JSON file.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Favorited book ids, kept in memory as a set and written back to disk
/// after every mutation. Storage problems never propagate to callers:
/// a missing or malformed file loads as empty, a failed write is logged
/// and the in-memory set stays authoritative for the session.
#[derive(Debug)]
pub struct FavoritesStore {
    path: PathBuf,
    ids: BTreeSet<i64>,
}

impl FavoritesStore {
    /// Load the persisted set, substituting an empty one on any failure.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let ids = match std::fs::read_to_string(&path) {
            Ok(body) => match serde_json::from_str::<Vec<i64>>(&body) {
                Ok(ids) => ids.into_iter().collect(),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "malformed wishlist file, starting empty");
                    BTreeSet::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeSet::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read wishlist file, starting empty");
                BTreeSet::new()
            }
        };
        tracing::debug!(path = %path.display(), count = ids.len(), "loaded wishlist");
        FavoritesStore { path, ids }
    }

    pub fn is_favorite(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    /// Add the id if absent, remove it if present, then persist.
    pub fn toggle(&mut self, id: i64) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
        self.save();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn save(&self) {
        let ids: Vec<i64> = self.ids.iter().copied().collect();
        let body = match serde_json::to_string(&ids) {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(error = %e, "could not encode wishlist");
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, body) {
            tracing::warn!(path = %self.path.display(), error = %e, "could not write wishlist file");
        }
    }
}
