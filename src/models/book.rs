//! Book model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use utoipa::ToSchema;

/// Reading state of a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReadingStatus {
    ToBeRead,
    InProgress,
    Completed,
}

impl ReadingStatus {
    pub const ALL: [ReadingStatus; 3] = [
        ReadingStatus::ToBeRead,
        ReadingStatus::InProgress,
        ReadingStatus::Completed,
    ];

    /// Value stored in the `status` column and used as listing key
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingStatus::ToBeRead => "to_be_read",
            ReadingStatus::InProgress => "in_progress",
            ReadingStatus::Completed => "completed",
        }
    }
}

impl std::fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown reading status: {0:?}")]
pub struct UnknownStatus(pub String);

impl std::str::FromStr for ReadingStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReadingStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

impl TryFrom<String> for ReadingStatus {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    /// Database-assigned identifier
    pub id: i32,
    pub title: String,
    #[sqlx(try_from = "String")]
    pub status: ReadingStatus,
}

/// Create book request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct NewBook {
    pub title: String,
    pub status: ReadingStatus,
}

impl From<Book> for NewBook {
    fn from(book: Book) -> Self {
        Self {
            title: book.title,
            status: book.status,
        }
    }
}

/// All books grouped by reading status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct CategorizedBooks {
    pub to_be_read: Vec<Book>,
    pub in_progress: Vec<Book>,
    pub completed: Vec<Book>,
}

impl CategorizedBooks {
    /// Partition books into their buckets, keeping the input order
    pub fn from_books(books: impl IntoIterator<Item = Book>) -> Self {
        let mut categorized = Self::default();
        for book in books {
            categorized.bucket_mut(book.status).push(book);
        }
        categorized
    }

    #[cfg(test)]
    fn bucket(&self, status: ReadingStatus) -> &[Book] {
        match status {
            ReadingStatus::ToBeRead => &self.to_be_read,
            ReadingStatus::InProgress => &self.in_progress,
            ReadingStatus::Completed => &self.completed,
        }
    }

    fn bucket_mut(&mut self, status: ReadingStatus) -> &mut Vec<Book> {
        match status {
            ReadingStatus::ToBeRead => &mut self.to_be_read,
            ReadingStatus::InProgress => &mut self.in_progress,
            ReadingStatus::Completed => &mut self.completed,
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.to_be_read.len() + self.in_progress.len() + self.completed.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn book(id: i32, title: &str, status: ReadingStatus) -> Book {
        Book {
            id,
            title: title.to_string(),
            status,
        }
    }

    #[test]
    fn test_status_wire_names() {
        for status in ReadingStatus::ALL {
            let value = serde_json::to_value(status).unwrap();
            assert_eq!(value, json!(status.as_str()));
            assert_eq!(status.as_str().parse::<ReadingStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_unknown_status_rejected() {
        assert_eq!(
            "abandoned".parse::<ReadingStatus>(),
            Err(UnknownStatus("abandoned".to_string()))
        );
        let body = json!({ "title": "Dune", "status": "abandoned" });
        assert!(serde_json::from_value::<NewBook>(body).is_err());
    }

    #[test]
    fn test_new_book_requires_fields() {
        assert!(serde_json::from_value::<NewBook>(json!({ "title": "Dune" })).is_err());
        assert!(serde_json::from_value::<NewBook>(json!({ "status": "completed" })).is_err());
    }

    #[test]
    fn test_categorize_empty() {
        let categorized = CategorizedBooks::from_books(Vec::new());
        assert!(categorized.is_empty());
        assert_eq!(
            serde_json::to_value(&categorized).unwrap(),
            json!({ "to_be_read": [], "in_progress": [], "completed": [] })
        );
    }

    #[test]
    fn test_categorize_one_bucket_per_book() {
        let books = vec![
            book(1, "Dune", ReadingStatus::ToBeRead),
            book(2, "Hyperion", ReadingStatus::InProgress),
            book(3, "Solaris", ReadingStatus::Completed),
            book(4, "Ubik", ReadingStatus::ToBeRead),
        ];
        let categorized = CategorizedBooks::from_books(books);

        assert_eq!(categorized.len(), 4);
        let ids: Vec<i32> = categorized.to_be_read.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 4]);
        assert_eq!(categorized.in_progress, vec![book(2, "Hyperion", ReadingStatus::InProgress)]);
        assert_eq!(categorized.completed, vec![book(3, "Solaris", ReadingStatus::Completed)]);

        for status in ReadingStatus::ALL {
            assert!(categorized.bucket(status).iter().all(|b| b.status == status));
        }
    }
}
