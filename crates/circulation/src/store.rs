use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use shelfmark_catalog::{Book, BookStatus, Reader};
use shelfmark_core::{BookId, DomainError, DomainResult, Entity, LoanId, ReaderId};
use shelfmark_events::{EventBus, EventEnvelope, InMemoryEventBus, Subscription};

use crate::event::{
    BookAdded, BookStatusChanged, CirculationEvent, LoanOpened, LoanReturned, ReaderRegistered,
};
use crate::loan::{LoanPolicy, LoanRecord, LoanStatus};

/// Sentinel label for a reader id with no matching record.
pub const UNKNOWN_READER: &str = "unknown reader";

/// Sentinel label for a book id with no matching record.
pub const UNKNOWN_BOOK: &str = "unknown book";

/// Owned copy of the three collections at a point in time, sorted by id for
/// stable presentation order.
///
/// This is the unit handed to presentation layers and to the recommendation
/// service; mutating it has no effect on the store.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct LibrarySnapshot {
    pub books: Vec<Book>,
    pub readers: Vec<Reader>,
    pub loans: Vec<LoanRecord>,
}

/// Authoritative in-process record of books, readers and loans.
///
/// The store exclusively owns its collections and every cross-entity
/// invariant is enforced here. Operations are synchronous and run to
/// completion; construct one instance at startup and keep it for the life
/// of the process. On a concurrent runtime, callers must serialize all
/// mutating calls (single writer) since `borrow_book`/`return_book` update
/// multiple entities per call and readers must never observe the midpoint.
#[derive(Debug)]
pub struct CirculationStore {
    books: HashMap<BookId, Book>,
    readers: HashMap<ReaderId, Reader>,
    loans: HashMap<LoanId, LoanRecord>,
    policy: LoanPolicy,
    bus: InMemoryEventBus<EventEnvelope<CirculationEvent>>,
    sequence: u64,
}

impl Default for CirculationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CirculationStore {
    pub fn new() -> Self {
        Self::with_policy(LoanPolicy::default())
    }

    pub fn with_policy(policy: LoanPolicy) -> Self {
        Self {
            books: HashMap::new(),
            readers: HashMap::new(),
            loans: HashMap::new(),
            policy,
            bus: InMemoryEventBus::new(),
            sequence: 0,
        }
    }

    pub fn policy(&self) -> LoanPolicy {
        self.policy
    }

    /// Subscribe to the store's event stream. Every successful mutation is
    /// delivered to all current subscribers before the mutating call
    /// returns; failed operations publish nothing.
    pub fn subscribe(&self) -> Subscription<EventEnvelope<CirculationEvent>> {
        self.bus.subscribe()
    }

    fn publish(&mut self, event: CirculationEvent) {
        self.sequence += 1;
        let envelope = EventEnvelope::new(Uuid::now_v7(), self.sequence, event);
        // A poisoned subscriber lock loses the notification, never the
        // mutation: subscribers are display listeners, not invariant
        // enforcers.
        let _ = self.bus.publish(envelope);
    }

    fn insert_unique<E>(map: &mut HashMap<E::Id, E>, entity: E) -> DomainResult<()>
    where
        E: Entity,
        E::Id: core::fmt::Display,
    {
        let id = entity.id().clone();
        if map.contains_key(&id) {
            return Err(DomainError::duplicate_id(id.to_string()));
        }
        map.insert(id, entity);
        Ok(())
    }

    /// Add a new book to the catalog. The id is caller-supplied and must be
    /// unique; an existing id is rejected, never overwritten.
    pub fn add_book(&mut self, book: Book, occurred_at: DateTime<Utc>) -> DomainResult<()> {
        book.validate()?;
        let book_id = book.id;
        Self::insert_unique(&mut self.books, book)?;
        self.publish(CirculationEvent::BookAdded(BookAdded {
            book_id,
            occurred_at,
        }));
        Ok(())
    }

    /// Register a reader on the roster. Same uniqueness rule as `add_book`.
    pub fn register_reader(
        &mut self,
        reader: Reader,
        occurred_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        reader.validate()?;
        let reader_id = reader.id;
        Self::insert_unique(&mut self.readers, reader)?;
        self.publish(CirculationEvent::ReaderRegistered(ReaderRegistered {
            reader_id,
            occurred_at,
        }));
        Ok(())
    }

    /// Set a book's status directly, independent of loan state.
    ///
    /// This is the catalog-maintenance path (marking `Maintenance`, `Lost`,
    /// `Reserved`). It can desynchronize book status from loan existence —
    /// e.g. marking a borrowed copy `Lost` — and callers bypassing
    /// `borrow_book`/`return_book` own that consistency.
    pub fn update_book_status(
        &mut self,
        book_id: BookId,
        status: BookStatus,
        occurred_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        let book = self
            .books
            .get_mut(&book_id)
            .ok_or_else(|| DomainError::not_found(format!("book {book_id}")))?;
        book.status = status;
        self.publish(CirculationEvent::BookStatusChanged(BookStatusChanged {
            book_id,
            status,
            occurred_at,
        }));
        Ok(())
    }

    /// Open a loan: create the single active `LoanRecord` and mark the book
    /// `Borrowed`, as one step.
    ///
    /// Every precondition is checked before the first write, so a failure
    /// leaves all three collections untouched. The loan's due date is fixed
    /// here as `borrow_date + policy period` and never recomputed.
    pub fn borrow_book(
        &mut self,
        book_id: BookId,
        reader_id: ReaderId,
        occurred_at: DateTime<Utc>,
    ) -> DomainResult<LoanId> {
        let reader = self
            .readers
            .get(&reader_id)
            .ok_or_else(|| DomainError::not_found(format!("reader {reader_id}")))?;
        if !reader.can_borrow() {
            return Err(DomainError::reader_suspended(format!("reader {reader_id}")));
        }

        let book = self
            .books
            .get_mut(&book_id)
            .ok_or_else(|| DomainError::not_found(format!("book {book_id}")))?;
        if !book.is_available() {
            return Err(DomainError::book_unavailable(format!(
                "book {book_id} is {}",
                book.status
            )));
        }

        let borrow_date = occurred_at.date_naive();
        let due_date = self.policy.due_date(borrow_date);
        book.status = BookStatus::Borrowed;

        let loan = LoanRecord {
            id: LoanId::new(),
            book_id,
            reader_id,
            borrow_date,
            due_date,
            return_date: None,
            status: LoanStatus::Active,
        };
        let loan_id = loan.id;
        self.loans.insert(loan_id, loan);

        self.publish(CirculationEvent::LoanOpened(LoanOpened {
            loan_id,
            book_id,
            reader_id,
            due_date,
            occurred_at,
        }));
        Ok(loan_id)
    }

    /// Close a loan: mark it `Returned`, stamp the return date and put the
    /// book back on the shelf.
    ///
    /// Returning an already-returned loan is a reported `InvalidState`
    /// failure, not a no-op, so double-return bugs surface instead of
    /// passing unnoticed.
    pub fn return_book(&mut self, loan_id: LoanId, occurred_at: DateTime<Utc>) -> DomainResult<()> {
        let loan = self
            .loans
            .get_mut(&loan_id)
            .ok_or_else(|| DomainError::not_found(format!("loan {loan_id}")))?;
        if loan.status == LoanStatus::Returned {
            return Err(DomainError::invalid_state(format!(
                "loan {loan_id} is already returned"
            )));
        }

        loan.status = LoanStatus::Returned;
        loan.return_date = Some(occurred_at.date_naive());
        let book_id = loan.book_id;
        let reader_id = loan.reader_id;

        // Books are never deleted, so the reference resolves; tolerate a
        // dangling one anyway rather than panicking mid-mutation.
        if let Some(book) = self.books.get_mut(&book_id) {
            book.status = BookStatus::Available;
        }

        self.publish(CirculationEvent::LoanReturned(LoanReturned {
            loan_id,
            book_id,
            reader_id,
            occurred_at,
        }));
        Ok(())
    }

    /// Best-effort display label; an unknown id yields a sentinel instead
    /// of failing.
    pub fn reader_name(&self, reader_id: ReaderId) -> String {
        self.readers
            .get(&reader_id)
            .map_or_else(|| UNKNOWN_READER.to_string(), |r| r.name.clone())
    }

    /// Best-effort display label; an unknown id yields a sentinel instead
    /// of failing.
    pub fn book_title(&self, book_id: BookId) -> String {
        self.books
            .get(&book_id)
            .map_or_else(|| UNKNOWN_BOOK.to_string(), |b| b.title.clone())
    }

    pub fn book(&self, book_id: BookId) -> Option<&Book> {
        self.books.get(&book_id)
    }

    pub fn reader(&self, reader_id: ReaderId) -> Option<&Reader> {
        self.readers.get(&reader_id)
    }

    pub fn loan(&self, loan_id: LoanId) -> Option<&LoanRecord> {
        self.loans.get(&loan_id)
    }

    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }

    pub fn readers(&self) -> impl Iterator<Item = &Reader> {
        self.readers.values()
    }

    pub fn loans(&self) -> impl Iterator<Item = &LoanRecord> {
        self.loans.values()
    }

    /// Owned, ordered copy of the current collections.
    pub fn snapshot(&self) -> LibrarySnapshot {
        let mut books: Vec<Book> = self.books.values().cloned().collect();
        books.sort_by_key(|b| b.id);
        let mut readers: Vec<Reader> = self.readers.values().cloned().collect();
        readers.sort_by_key(|r| r.id);
        let mut loans: Vec<LoanRecord> = self.loans.values().cloned().collect();
        loans.sort_by_key(|l| l.id);

        LibrarySnapshot {
            books,
            readers,
            loans,
        }
    }
}
