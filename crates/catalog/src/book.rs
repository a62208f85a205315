use serde::{Deserialize, Serialize};

use shelfmark_core::{BookId, DomainError, DomainResult, Entity};

/// Shelf status of a single physical copy.
///
/// Circulation only ever moves a copy between `Available` and `Borrowed`;
/// the other states are reachable through the administrative status update
/// path alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    Available,
    Borrowed,
    Reserved,
    Lost,
    Maintenance,
}

impl BookStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "available",
            BookStatus::Borrowed => "borrowed",
            BookStatus::Reserved => "reserved",
            BookStatus::Lost => "lost",
            BookStatus::Maintenance => "maintenance",
        }
    }
}

impl core::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog record for a single physical copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub category: String,
    pub publisher: String,
    /// Year-month of publication, e.g. "2008-01".
    pub publish_date: String,
    pub status: BookStatus,
    /// Shelf mark / call number, e.g. "A-SF-001".
    pub location: String,
    pub cover_url: String,
    pub description: Option<String>,
    /// List price; non-negative.
    pub price: f64,
}

impl Book {
    /// Whether this copy can be handed out right now.
    pub fn is_available(&self) -> bool {
        self.status == BookStatus::Available
    }

    /// Record-level validation. Cross-entity checks (loans, duplicates)
    /// belong to the circulation store.
    pub fn validate(&self) -> DomainResult<()> {
        if self.title.trim().is_empty() {
            return Err(DomainError::validation("title cannot be empty"));
        }
        if self.author.trim().is_empty() {
            return Err(DomainError::validation("author cannot be empty"));
        }
        if !(self.price.is_finite() && self.price >= 0.0) {
            return Err(DomainError::validation("price must be non-negative"));
        }
        Ok(())
    }
}

impl Entity for Book {
    type Id = BookId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Book {
        Book {
            id: BookId::new(),
            title: "The Three-Body Problem".to_string(),
            author: "Liu Cixin".to_string(),
            isbn: "9787536692930".to_string(),
            category: "Science Fiction".to_string(),
            publisher: "Chongqing Press".to_string(),
            publish_date: "2008-01".to_string(),
            status: BookStatus::Available,
            location: "A-SF-001".to_string(),
            cover_url: "https://covers.example/1.jpg".to_string(),
            description: Some("First contact and its consequences.".to_string()),
            price: 23.0,
        }
    }

    #[test]
    fn valid_record_passes() {
        sample_book().validate().unwrap();
    }

    #[test]
    fn rejects_blank_title() {
        let mut book = sample_book();
        book.title = "   ".to_string();
        let err = book.validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn rejects_negative_price() {
        let mut book = sample_book();
        book.price = -1.0;
        let err = book.validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn only_available_copies_can_circulate() {
        let mut book = sample_book();
        assert!(book.is_available());

        for status in [
            BookStatus::Borrowed,
            BookStatus::Reserved,
            BookStatus::Lost,
            BookStatus::Maintenance,
        ] {
            book.status = status;
            assert!(!book.is_available());
        }
    }
}
