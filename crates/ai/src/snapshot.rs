use serde::{Deserialize, Serialize};

/// One catalog entry as seen by the recommender.
///
/// Exactly the fields worth sending to a language model: enough to ground a
/// suggestion, nothing circulation-critical. `status` is a display label
/// ("available", "borrowed", ...) supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogBook {
    pub title: String,
    pub author: String,
    pub category: String,
    pub description: Option<String>,
    pub status: String,
}

impl CatalogBook {
    pub fn is_available(&self) -> bool {
        self.status.eq_ignore_ascii_case("available")
    }
}

/// Read-only catalog context handed to the recommender.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub books: Vec<CatalogBook>,
}

impl CatalogSnapshot {
    pub fn from_books(books: impl IntoIterator<Item = CatalogBook>) -> Self {
        Self {
            books: books.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
