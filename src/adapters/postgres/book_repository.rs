use crate::domain::{BookId, BookRecord, Page, PageRequest};
use crate::ports::book_repository::{
    BookRepository as BookRepositoryTrait, BookRepositoryError, Result,
};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Row, postgres::PgRow};

/// PostgreSQLの行データをBookRecordに変換する
fn map_row_to_book(row: &PgRow) -> BookRecord {
    BookRecord {
        id: Some(BookId::from_string(row.get::<String, _>("id"))),
        title: row.get("title"),
        author: row.get("author"),
        published_date: row.get("published_date"),
        isbn: row.get("isbn"),
        price: row.get("price"),
    }
}

/// 書き込み時のsqlxエラーを変換する
///
/// `books_isbn_key`の一意制約違反は`DuplicateIsbn`として返す。
fn map_write_error(err: sqlx::Error, isbn: &str) -> BookRepositoryError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return BookRepositoryError::DuplicateIsbn(isbn.to_string());
        }
    }
    BookRepositoryError::from(err)
}

/// BookRepositoryのPostgreSQL実装
///
/// ISBNの一意性は`books.isbn`のUNIQUE制約で保証する。
pub struct BookRepository {
    pool: PgPool,
}

impl BookRepository {
    /// PostgreSQLコネクションプールから新しいBookRepositoryを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepositoryTrait for BookRepository {
    async fn find_by_id(&self, id: &BookId) -> Result<Option<BookRecord>> {
        let row = sqlx::query(
            r#"
            SELECT id, title, author, published_date, isbn, price
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(map_row_to_book))
    }

    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<BookRecord>> {
        let row = sqlx::query(
            r#"
            SELECT id, title, author, published_date, isbn, price
            FROM books
            WHERE isbn = $1
            "#,
        )
        .bind(isbn)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(map_row_to_book))
    }

    /// 書籍を保存
    ///
    /// 新規レコードは既定値を適用してからINSERTする。
    /// 既存IDの場合はUPDATEで全カラムを置き換え、行がなければ`NotFound`を返す。
    async fn save(&self, mut record: BookRecord) -> Result<BookRecord> {
        if record.isbn.is_empty() {
            return Err(BookRepositoryError::NotNull("isbn"));
        }

        let row = match record.id.take() {
            Some(id) => sqlx::query(
                r#"
                UPDATE books
                SET title = $2, author = $3, published_date = $4, isbn = $5, price = $6
                WHERE id = $1
                RETURNING id, title, author, published_date, isbn, price
                "#,
            )
            .bind(id.as_str())
            .bind(&record.title)
            .bind(&record.author)
            .bind(record.published_date)
            .bind(&record.isbn)
            .bind(record.price)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_write_error(e, &record.isbn))?
            .ok_or_else(|| BookRepositoryError::NotFound(id.to_string()))?,
            None => {
                record.apply_defaults(Utc::now().date_naive());
                let id = BookId::new();
                sqlx::query(
                    r#"
                    INSERT INTO books (id, title, author, published_date, isbn, price)
                    VALUES ($1, $2, $3, $4, $5, $6)
                    RETURNING id, title, author, published_date, isbn, price
                    "#,
                )
                .bind(id.as_str())
                .bind(&record.title)
                .bind(&record.author)
                .bind(record.published_date)
                .bind(&record.isbn)
                .bind(record.price)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| map_write_error(e, &record.isbn))?
            }
        };

        Ok(map_row_to_book(&row))
    }

    /// 挿入順（seq）で1ページ分を取得
    async fn find_all_paged(&self, request: PageRequest) -> Result<Page<BookRecord>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;

        let rows = sqlx::query(
            r#"
            SELECT id, title, author, published_date, isbn, price
            FROM books
            ORDER BY seq ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(i64::from(request.size()))
        .bind(i64::try_from(request.offset()).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?;

        let items = rows.iter().map(map_row_to_book).collect();
        Ok(Page::new(items, request, total.max(0) as u64))
    }

    async fn exists_by_id(&self, id: &BookId) -> Result<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE id = $1)")
            .bind(id.as_str())
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    async fn delete_by_id(&self, id: &BookId) -> Result<()> {
        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
