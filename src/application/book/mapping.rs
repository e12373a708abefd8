use thiserror::Error;

use super::dto::BookDto;
use crate::domain::{BookId, BookRecord};

/// 転送オブジェクトからレコードへの変換エラー
///
/// バリデーション済みの入力では発生しない。
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MappingError {
    #[error("Book ISBN must not be null")]
    MissingIsbn,

    #[error("Book price must not be null")]
    MissingPrice,
}

impl From<BookRecord> for BookDto {
    fn from(record: BookRecord) -> Self {
        Self {
            id: record.id.map(BookId::into_inner),
            title: record.title,
            author: record.author,
            published_date: record.published_date,
            isbn: Some(record.isbn),
            price: Some(record.price),
        }
    }
}

impl TryFrom<BookDto> for BookRecord {
    type Error = MappingError;

    fn try_from(dto: BookDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: dto.id.map(BookId::from_string),
            title: dto.title,
            author: dto.author,
            published_date: dto.published_date,
            isbn: dto.isbn.ok_or(MappingError::MissingIsbn)?,
            price: dto.price.ok_or(MappingError::MissingPrice)?,
        })
    }
}

/// 既存レコードの可変フィールドを入力で丸ごと置き換える
///
/// IDは変更しない。入力にISBNがない場合のみ既存のISBNを残す。
/// 失敗時はレコードを変更しない。
pub fn apply_update(record: &mut BookRecord, input: BookDto) -> Result<(), MappingError> {
    let price = input.price.ok_or(MappingError::MissingPrice)?;

    record.title = input.title;
    record.author = input.author;
    record.published_date = input.published_date;
    if let Some(isbn) = input.isbn {
        record.isbn = isbn;
    }
    record.price = price;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn saved_record() -> BookRecord {
        BookRecord {
            id: Some(BookId::from_string("0b6f5c1e-2a57-4a43-9d7e-4f6a1c7b8e90")),
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            published_date: NaiveDate::from_ymd_opt(1965, 8, 1),
            isbn: "9780306406157".to_string(),
            price: Decimal::new(1999, 2),
        }
    }

    #[test]
    fn test_record_to_dto_copies_every_field() {
        let dto = BookDto::from(saved_record());

        assert_eq!(dto.id.as_deref(), Some("0b6f5c1e-2a57-4a43-9d7e-4f6a1c7b8e90"));
        assert_eq!(dto.title, "Dune");
        assert_eq!(dto.author, "Frank Herbert");
        assert_eq!(dto.published_date, NaiveDate::from_ymd_opt(1965, 8, 1));
        assert_eq!(dto.isbn.as_deref(), Some("9780306406157"));
        assert_eq!(dto.price, Some(Decimal::new(1999, 2)));
    }

    #[test]
    fn test_record_round_trip_is_lossless() {
        let record = saved_record();
        let back = BookRecord::try_from(BookDto::from(record.clone())).unwrap();
        assert_eq!(back, record);

        let unsaved = BookRecord {
            id: None,
            published_date: None,
            ..saved_record()
        };
        let back = BookRecord::try_from(BookDto::from(unsaved.clone())).unwrap();
        assert_eq!(back, unsaved);
    }

    #[test]
    fn test_dto_without_isbn_cannot_become_record() {
        let dto = BookDto {
            isbn: None,
            ..BookDto::from(saved_record())
        };
        assert_eq!(BookRecord::try_from(dto), Err(MappingError::MissingIsbn));
    }

    #[test]
    fn test_apply_update_replaces_mutable_fields() {
        let mut record = saved_record();
        let input = BookDto {
            id: Some("ignored".to_string()),
            title: "Children of Dune".to_string(),
            author: "Frank Herbert".to_string(),
            published_date: None,
            isbn: Some("9780000000002".to_string()),
            price: Some(Decimal::new(2550, 2)),
        };

        apply_update(&mut record, input).unwrap();

        assert_eq!(
            record.id,
            Some(BookId::from_string("0b6f5c1e-2a57-4a43-9d7e-4f6a1c7b8e90"))
        );
        assert_eq!(record.title, "Children of Dune");
        assert_eq!(record.published_date, None);
        assert_eq!(record.isbn, "9780000000002");
        assert_eq!(record.price, Decimal::new(2550, 2));
    }

    #[test]
    fn test_apply_update_keeps_isbn_when_absent() {
        let mut record = saved_record();
        let input = BookDto {
            isbn: None,
            ..BookDto::from(saved_record())
        };

        apply_update(&mut record, input).unwrap();

        assert_eq!(record.isbn, "9780306406157");
    }

    #[test]
    fn test_apply_update_without_price_leaves_record_untouched() {
        let mut record = saved_record();
        let input = BookDto {
            title: "Changed".to_string(),
            price: None,
            ..BookDto::from(saved_record())
        };

        assert_eq!(
            apply_update(&mut record, input),
            Err(MappingError::MissingPrice)
        );
        assert_eq!(record, saved_record());
    }
}
