use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use shelfmark_catalog::BookStatus;
use shelfmark_core::{BookId, LoanId, ReaderId};
use shelfmark_events::Event;

/// Event: BookAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookAdded {
    pub book_id: BookId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ReaderRegistered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderRegistered {
    pub reader_id: ReaderId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: BookStatusChanged (administrative status update path).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookStatusChanged {
    pub book_id: BookId,
    pub status: BookStatus,
    pub occurred_at: DateTime<Utc>,
}

/// Event: LoanOpened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanOpened {
    pub loan_id: LoanId,
    pub book_id: BookId,
    pub reader_id: ReaderId,
    pub due_date: NaiveDate,
    pub occurred_at: DateTime<Utc>,
}

/// Event: LoanReturned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanReturned {
    pub loan_id: LoanId,
    pub book_id: BookId,
    pub reader_id: ReaderId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CirculationEvent {
    BookAdded(BookAdded),
    ReaderRegistered(ReaderRegistered),
    BookStatusChanged(BookStatusChanged),
    LoanOpened(LoanOpened),
    LoanReturned(LoanReturned),
}

impl Event for CirculationEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CirculationEvent::BookAdded(_) => "catalog.book.added",
            CirculationEvent::ReaderRegistered(_) => "roster.reader.registered",
            CirculationEvent::BookStatusChanged(_) => "catalog.book.status_changed",
            CirculationEvent::LoanOpened(_) => "circulation.loan.opened",
            CirculationEvent::LoanReturned(_) => "circulation.loan.returned",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CirculationEvent::BookAdded(e) => e.occurred_at,
            CirculationEvent::ReaderRegistered(e) => e.occurred_at,
            CirculationEvent::BookStatusChanged(e) => e.occurred_at,
            CirculationEvent::LoanOpened(e) => e.occurred_at,
            CirculationEvent::LoanReturned(e) => e.occurred_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn event_types_are_stable_identifiers() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let event = CirculationEvent::LoanOpened(LoanOpened {
            loan_id: LoanId::new(),
            book_id: BookId::new(),
            reader_id: ReaderId::new(),
            due_date: at.date_naive(),
            occurred_at: at,
        });

        assert_eq!(event.event_type(), "circulation.loan.opened");
        assert_eq!(event.version(), 1);
        assert_eq!(event.occurred_at(), at);
    }
}
