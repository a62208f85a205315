//! Read-only projections for presentation layers.
//!
//! Pure functions over the store's current collections; nothing here
//! mutates state, so they are safe to call at any time between mutations.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::loan::LoanRecord;
use crate::store::CirculationStore;

/// Aggregate counters for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LibraryStats {
    pub total_books: usize,
    pub total_readers: usize,
    pub active_loans: usize,
    pub overdue_loans: usize,
}

/// Dashboard counters as of `today`.
pub fn library_stats(store: &CirculationStore, today: NaiveDate) -> LibraryStats {
    LibraryStats {
        total_books: store.books().count(),
        total_readers: store.readers().count(),
        active_loans: store.loans().filter(|l| l.is_active()).count(),
        overdue_loans: store.loans().filter(|l| l.is_overdue(today)).count(),
    }
}

/// Count of books per category, one entry per distinct category present.
pub fn category_histogram(store: &CirculationStore) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for book in store.books() {
        *counts.entry(book.category.clone()).or_insert(0) += 1;
    }
    counts
}

/// Display join of a loan with its book and reader labels.
///
/// Dangling references resolve to the store's sentinel labels; this view is
/// for rendering, not invariant enforcement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanView {
    pub loan: LoanRecord,
    pub book_title: String,
    pub reader_name: String,
    pub overdue: bool,
}

/// All loans joined with display labels, ordered by loan id for stable
/// output.
pub fn loan_views(store: &CirculationStore, today: NaiveDate) -> Vec<LoanView> {
    let mut views: Vec<LoanView> = store
        .loans()
        .map(|loan| LoanView {
            book_title: store.book_title(loan.book_id),
            reader_name: store.reader_name(loan.reader_id),
            overdue: loan.is_overdue(today),
            loan: loan.clone(),
        })
        .collect();
    views.sort_by_key(|v| v.loan.id);
    views
}
