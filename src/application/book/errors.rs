use thiserror::Error;
use validator::ValidationErrors;

use super::mapping::MappingError;
use crate::domain::PageRequestError;
use crate::ports::BookRepositoryError;

/// 書籍管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum BookApplicationError {
    /// 入力が欠落している、または引数が不正
    #[error("{0}")]
    InvalidArgument(String),

    /// フィールド制約違反（違反の一覧を保持する）
    #[error("Validation failed: {0}")]
    ValidationFailure(ValidationErrors),

    /// ISBNが既に使われている
    #[error("A book with the same ISBN already exists: {0}")]
    DuplicateIsbn(String),

    /// 書籍が存在しない
    #[error("Book not found with id: {0}")]
    NotFound(String),

    /// それ以外の障害（ストア障害など）
    #[error("Unexpected error")]
    Unexpected(#[source] BookRepositoryError),
}

impl From<BookRepositoryError> for BookApplicationError {
    /// ストレージ層の一意制約違反はDuplicateIsbn、更新対象の消失はNotFound、
    /// それ以外はUnexpectedとして扱う
    fn from(err: BookRepositoryError) -> Self {
        match err {
            BookRepositoryError::DuplicateIsbn(isbn) => BookApplicationError::DuplicateIsbn(isbn),
            BookRepositoryError::NotFound(id) => BookApplicationError::NotFound(id),
            other => BookApplicationError::Unexpected(other),
        }
    }
}

impl From<MappingError> for BookApplicationError {
    fn from(err: MappingError) -> Self {
        BookApplicationError::InvalidArgument(err.to_string())
    }
}

impl From<PageRequestError> for BookApplicationError {
    fn from(err: PageRequestError) -> Self {
        BookApplicationError::InvalidArgument(err.to_string())
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, BookApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_errors_map_to_taxonomy() {
        let duplicate = BookApplicationError::from(BookRepositoryError::DuplicateIsbn(
            "9780306406157".to_string(),
        ));
        assert!(matches!(duplicate, BookApplicationError::DuplicateIsbn(isbn) if isbn == "9780306406157"));

        let vanished = BookApplicationError::from(BookRepositoryError::NotFound("b-1".to_string()));
        assert_eq!(vanished.to_string(), "Book not found with id: b-1");

        let backend = BookApplicationError::from(BookRepositoryError::Backend("down".into()));
        assert!(matches!(backend, BookApplicationError::Unexpected(_)));
    }
}
