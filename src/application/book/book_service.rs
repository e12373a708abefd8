use crate::domain::{BookId, BookRecord, Page, PageRequest};
use crate::ports::*;
use std::sync::Arc;

use super::dto::BookDto;
use super::errors::{BookApplicationError, Result};
use super::mapping::apply_update;

/// 作成時にISBNを生成し直す最大回数
pub const MAX_ISBN_ATTEMPTS: usize = 5;

/// サービスの依存関係
///
/// 関数型DDDの原則に従い、データ構造として定義。
/// 振る舞い（メソッド）は持たず、純粋な関数に依存関係を渡す。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub book_repository: Arc<dyn BookRepository>,
    pub isbn_generator: Arc<dyn IsbnGenerator>,
}

/// IDで書籍レコードを取得するヘルパー関数
///
/// get_book_by_id, update_bookで共通利用される。
///
/// # エラー
/// - NotFound: レコードが存在しない
/// - Unexpected: ストアの障害
async fn load_book(repository: &Arc<dyn BookRepository>, id: &BookId) -> Result<BookRecord> {
    repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| BookApplicationError::NotFound(id.to_string()))
}

/// 書籍を作成する
///
/// ビジネスルール：
/// - 入力が存在すること
/// - 入力のISBNと同じISBNの書籍が存在しないこと
/// - ISBNはサーバー側で生成した値で必ず上書きする
/// - IDはRecord Storeが採番する（クライアント指定のIDは無視）
///
/// # 一意性
///
/// 入力ISBNの事前確認と生成ISBNの存在確認は早期リジェクトのための最適化であり、
/// 正となるのはRecord Storeの一意制約。保存時に一意制約違反が報告された場合も
/// ISBNを生成し直す。試行は`MAX_ISBN_ATTEMPTS`回まで。
///
/// 入力ISBNの事前確認は、保存されるのが生成値である以上ほぼ意味を持たないが、
/// 既存の振る舞いとして残している。
///
/// # 戻り値
/// 保存された書籍（転送オブジェクト形式）
pub async fn create_book(deps: &ServiceDependencies, input: Option<BookDto>) -> Result<BookDto> {
    let mut input = input
        .ok_or_else(|| BookApplicationError::InvalidArgument("Book cannot be null".to_string()))?;

    // 1. 入力ISBNの重複確認
    if let Some(isbn) = input.isbn.as_deref() {
        if deps.book_repository.find_by_isbn(isbn).await?.is_some() {
            return Err(BookApplicationError::DuplicateIsbn(isbn.to_string()));
        }
    }

    input.id = None;

    let mut last_isbn = String::new();
    for attempt in 1..=MAX_ISBN_ATTEMPTS {
        // 2. ISBNを生成し、既存レコードと衝突しないか確認
        let isbn = deps.isbn_generator.generate();
        if deps.book_repository.find_by_isbn(&isbn).await?.is_some() {
            tracing::warn!(attempt, isbn = %isbn, "Generated ISBN already in use, regenerating");
            last_isbn = isbn;
            continue;
        }

        // 3. 入力のISBNを上書きして保存
        input.isbn = Some(isbn.clone());
        let record = BookRecord::try_from(input.clone())?;

        match deps.book_repository.save(record).await {
            Ok(saved) => {
                let dto = BookDto::from(saved);
                tracing::info!(
                    book_id = dto.id.as_deref().unwrap_or_default(),
                    isbn = %isbn,
                    "Book created"
                );
                return Ok(dto);
            }
            Err(BookRepositoryError::DuplicateIsbn(_)) => {
                tracing::warn!(attempt, isbn = %isbn, "ISBN rejected by store, regenerating");
                last_isbn = isbn;
            }
            Err(e) => return Err(e.into()),
        }
    }

    tracing::error!(
        attempts = MAX_ISBN_ATTEMPTS,
        "Could not generate an unused ISBN"
    );
    Err(BookApplicationError::DuplicateIsbn(last_isbn))
}

/// 書籍を1ページ分取得する
///
/// ページ番号は0始まり。既定値（0/10）の適用は呼び出し側の責務。
/// 書籍が1冊もない場合も空のページを返し、エラーにはしない。
pub async fn list_books(deps: &ServiceDependencies, page: i64, size: i64) -> Result<Page<BookDto>> {
    let request = PageRequest::new(page, size)?;

    let records = deps.book_repository.find_all_paged(request).await?;

    Ok(records.map(BookDto::from))
}

/// IDで書籍を取得する
pub async fn get_book_by_id(deps: &ServiceDependencies, id: &BookId) -> Result<BookDto> {
    let record = load_book(&deps.book_repository, id).await?;
    Ok(BookDto::from(record))
}

/// 書籍を更新する
///
/// ビジネスルール：
/// - 入力が存在すること
/// - 書籍が存在すること
/// - タイトル、著者、出版日、ISBN、価格を入力で丸ごと置き換える（部分更新なし）
///
/// ISBNの重複はここでは確認しない。他の書籍と衝突した場合は
/// Record Storeの一意制約によりDuplicateIsbnになる。
pub async fn update_book(
    deps: &ServiceDependencies,
    id: &BookId,
    input: Option<BookDto>,
) -> Result<BookDto> {
    let input = input.ok_or_else(|| {
        BookApplicationError::InvalidArgument("Updated book data cannot be null".to_string())
    })?;

    let mut record = load_book(&deps.book_repository, id).await?;
    apply_update(&mut record, input)?;

    let updated = deps.book_repository.save(record).await?;
    tracing::info!(book_id = %id, isbn = %updated.isbn, "Book updated");

    Ok(BookDto::from(updated))
}

/// 書籍を削除する
///
/// 削除したIDは二度と参照できない。
pub async fn delete_book(deps: &ServiceDependencies, id: &BookId) -> Result<()> {
    if !deps.book_repository.exists_by_id(id).await? {
        return Err(BookApplicationError::NotFound(id.to_string()));
    }

    deps.book_repository.delete_by_id(id).await?;
    tracing::info!(book_id = %id, "Book deleted");

    Ok(())
}
