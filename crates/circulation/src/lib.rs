//! `shelfmark-circulation` — the circulation state store.
//!
//! Single authoritative holder of the book, reader and loan collections.
//! Every cross-entity invariant is enforced here, nowhere else: external
//! callers funnel all writes through the store's operation set and re-render
//! from the snapshots it publishes.

pub mod event;
pub mod loan;
pub mod store;
pub mod views;

pub use event::{
    BookAdded, BookStatusChanged, CirculationEvent, LoanOpened, LoanReturned, ReaderRegistered,
};
pub use loan::{LoanPolicy, LoanRecord, LoanStatus};
pub use store::{CirculationStore, LibrarySnapshot, UNKNOWN_BOOK, UNKNOWN_READER};
pub use views::{LibraryStats, LoanView};
