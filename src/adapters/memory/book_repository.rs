use crate::domain::{BookId, BookRecord, Page, PageRequest};
use crate::ports::book_repository::{
    BookRepository as BookRepositoryTrait, BookRepositoryError, Result,
};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Mutex, MutexGuard};

/// BookRepositoryのインメモリ実装
///
/// 挿入順を保持し、ISBNの一意制約をPostgreSQL実装と同じく`save`で強制する。
/// 開発時のローカル起動とテストで使用する。
pub struct BookRepository {
    books: Mutex<Vec<BookRecord>>,
}

impl BookRepository {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(Vec::new()),
        }
    }

    /// 保存済みの件数
    pub fn len(&self) -> usize {
        self.books.lock().map(|books| books.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<BookRecord>>> {
        self.books
            .lock()
            .map_err(|_| BookRepositoryError::Backend("book store lock poisoned".into()))
    }
}

impl Default for BookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookRepositoryTrait for BookRepository {
    async fn find_by_id(&self, id: &BookId) -> Result<Option<BookRecord>> {
        let books = self.lock()?;
        Ok(books.iter().find(|b| b.id.as_ref() == Some(id)).cloned())
    }

    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<BookRecord>> {
        let books = self.lock()?;
        Ok(books.iter().find(|b| b.isbn == isbn).cloned())
    }

    /// 一意制約の確認と書き込みを同じロック内で行う
    async fn save(&self, mut record: BookRecord) -> Result<BookRecord> {
        if record.isbn.is_empty() {
            return Err(BookRepositoryError::NotNull("isbn"));
        }

        let mut books = self.lock()?;

        let existing = match &record.id {
            Some(id) => match books.iter().position(|b| b.id.as_ref() == Some(id)) {
                Some(index) => Some(index),
                None => return Err(BookRepositoryError::NotFound(id.to_string())),
            },
            None => None,
        };

        let isbn_taken = books
            .iter()
            .enumerate()
            .any(|(i, b)| b.isbn == record.isbn && Some(i) != existing);
        if isbn_taken {
            return Err(BookRepositoryError::DuplicateIsbn(record.isbn));
        }

        match existing {
            Some(index) => books[index] = record.clone(),
            None => {
                record.apply_defaults(Utc::now().date_naive());
                record.id = Some(BookId::new());
                books.push(record.clone());
            }
        }

        Ok(record)
    }

    async fn find_all_paged(&self, request: PageRequest) -> Result<Page<BookRecord>> {
        let books = self.lock()?;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let items = books
            .iter()
            .skip(offset)
            .take(request.size() as usize)
            .cloned()
            .collect();

        Ok(Page::new(items, request, books.len() as u64))
    }

    async fn exists_by_id(&self, id: &BookId) -> Result<bool> {
        let books = self.lock()?;
        Ok(books.iter().any(|b| b.id.as_ref() == Some(id)))
    }

    async fn delete_by_id(&self, id: &BookId) -> Result<()> {
        let mut books = self.lock()?;
        books.retain(|b| b.id.as_ref() != Some(id));
        Ok(())
    }
}
