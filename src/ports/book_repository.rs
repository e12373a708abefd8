use crate::domain::{BookId, BookRecord, Page, PageRequest};
use async_trait::async_trait;
use thiserror::Error;

/// Record Storeのエラー
#[derive(Debug, Error)]
pub enum BookRepositoryError {
    /// ISBNの一意制約違反（ストレージ層の制約が正とする）
    #[error("ISBN {0} is already in use")]
    DuplicateIsbn(String),

    /// 更新対象のレコードが存在しない（削除済みを含む）
    #[error("Book {0} does not exist")]
    NotFound(String),

    /// 必須カラムが未設定
    #[error("Column {0} must not be null")]
    NotNull(&'static str),

    /// バックエンドの障害
    #[error("Storage backend error")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<sqlx::Error> for BookRepositoryError {
    fn from(err: sqlx::Error) -> Self {
        BookRepositoryError::Backend(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, BookRepositoryError>;

/// 書籍リポジトリポート
///
/// 書籍レコードの永続化を抽象化する。
/// ISBNの一意性はこのポートの実装（ストレージ層）が保証する。
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// IDで書籍を取得する
    async fn find_by_id(&self, id: &BookId) -> Result<Option<BookRecord>>;

    /// ISBNで書籍を取得する
    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<BookRecord>>;

    /// 書籍を保存する
    ///
    /// IDが未設定なら新しいIDを採番して挿入し、既定値を適用する。
    /// IDが設定済みならそのレコードを置き換える。そのIDのレコードがなければ
    /// `NotFound`を返し、削除済みのIDを復活させない。
    /// ISBNが他のレコードと重複する場合は`DuplicateIsbn`を返す。
    async fn save(&self, record: BookRecord) -> Result<BookRecord>;

    /// 挿入順で1ページ分の書籍を取得する
    ///
    /// 空のページはエラーではない。
    async fn find_all_paged(&self, request: PageRequest) -> Result<Page<BookRecord>>;

    /// 書籍が存在するか確認する
    async fn exists_by_id(&self, id: &BookId) -> Result<bool>;

    /// IDで書籍を削除する
    async fn delete_by_id(&self, id: &BookId) -> Result<()>;
}
