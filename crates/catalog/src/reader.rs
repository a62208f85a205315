use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shelfmark_core::{DomainError, DomainResult, Entity, ReaderId};

/// Reader category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReaderKind {
    Student,
    Teacher,
    Vip,
}

/// Reader account lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReaderStatus {
    Active,
    Suspended,
}

/// A registered reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reader {
    pub id: ReaderId,
    pub name: String,
    pub kind: ReaderKind,
    pub email: String,
    pub phone: String,
    pub registered_date: NaiveDate,
    pub avatar_url: String,
    pub status: ReaderStatus,
}

impl Reader {
    /// Invariant helper: whether this reader is allowed to borrow.
    ///
    /// Suspended readers cannot borrow.
    pub fn can_borrow(&self) -> bool {
        self.status == ReaderStatus::Active
    }

    /// Record-level validation.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(())
    }
}

impl Entity for Reader {
    type Id = ReaderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_reader() -> Reader {
        Reader {
            id: ReaderId::new(),
            name: "Zhang San".to_string(),
            kind: ReaderKind::Student,
            email: "zhangsan@example.com".to_string(),
            phone: "13800138000".to_string(),
            registered_date: NaiveDate::from_ymd_opt(2023, 9, 1).unwrap(),
            avatar_url: "https://avatars.example/10.jpg".to_string(),
            status: ReaderStatus::Active,
        }
    }

    #[test]
    fn active_reader_can_borrow() {
        assert!(sample_reader().can_borrow());
    }

    #[test]
    fn suspended_reader_cannot_borrow() {
        let mut reader = sample_reader();
        reader.status = ReaderStatus::Suspended;
        assert!(!reader.can_borrow());
    }

    #[test]
    fn rejects_blank_name() {
        let mut reader = sample_reader();
        reader.name = " ".to_string();
        let err = reader.validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
