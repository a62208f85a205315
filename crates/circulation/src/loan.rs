use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use shelfmark_core::{BookId, Entity, LoanId, ReaderId};

/// Loan lifecycle. `Active` is initial, `Returned` is terminal, and
/// `Active → Returned` is the only transition. Overdue is derived from the
/// due date and is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    Active,
    Returned,
}

/// Circulation policy knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanPolicy {
    /// Days from borrow date to due date.
    pub loan_period_days: u32,
}

impl Default for LoanPolicy {
    fn default() -> Self {
        Self {
            loan_period_days: 30,
        }
    }
}

impl LoanPolicy {
    /// Due date for a loan opened on `borrow_date`. Fixed at creation and
    /// never recomputed afterwards.
    pub fn due_date(&self, borrow_date: NaiveDate) -> NaiveDate {
        borrow_date + Days::new(u64::from(self.loan_period_days))
    }
}

/// A single borrow of a single copy.
///
/// `book_id` and `reader_id` are identifier-only references resolved by
/// lookup; updating a book or reader never touches existing loans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRecord {
    pub id: LoanId,
    pub book_id: BookId,
    pub reader_id: ReaderId,
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
    /// Set exactly once, on the transition to `Returned`.
    pub return_date: Option<NaiveDate>,
    pub status: LoanStatus,
}

impl LoanRecord {
    pub fn is_active(&self) -> bool {
        self.status == LoanStatus::Active
    }

    /// Active and past due as of `today`. The due date itself is not
    /// overdue; only days strictly after it are.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.is_active() && self.due_date < today
    }
}

impl Entity for LoanRecord {
    type Id = LoanId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_loan(due: NaiveDate) -> LoanRecord {
        LoanRecord {
            id: LoanId::new(),
            book_id: BookId::new(),
            reader_id: ReaderId::new(),
            borrow_date: date(2024, 1, 1),
            due_date: due,
            return_date: None,
            status: LoanStatus::Active,
        }
    }

    #[test]
    fn default_policy_lends_for_thirty_days() {
        let policy = LoanPolicy::default();
        assert_eq!(policy.loan_period_days, 30);
        assert_eq!(policy.due_date(date(2024, 1, 1)), date(2024, 1, 31));
    }

    #[test]
    fn custom_period_is_respected() {
        let policy = LoanPolicy {
            loan_period_days: 14,
        };
        assert_eq!(policy.due_date(date(2024, 1, 1)), date(2024, 1, 15));
    }

    #[test]
    fn due_date_crosses_month_boundaries() {
        let policy = LoanPolicy::default();
        assert_eq!(policy.due_date(date(2024, 2, 15)), date(2024, 3, 16));
    }

    #[test]
    fn overdue_starts_strictly_after_the_due_date() {
        let loan = sample_loan(date(2024, 1, 31));
        assert!(!loan.is_overdue(date(2024, 1, 30)));
        assert!(!loan.is_overdue(date(2024, 1, 31)));
        assert!(loan.is_overdue(date(2024, 2, 1)));
    }

    #[test]
    fn returned_loans_are_never_overdue() {
        let mut loan = sample_loan(date(2024, 1, 31));
        loan.status = LoanStatus::Returned;
        loan.return_date = Some(date(2024, 3, 1));
        assert!(!loan.is_overdue(date(2024, 3, 1)));
    }
}
