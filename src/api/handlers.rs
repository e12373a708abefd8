use crate::application::book::{
    BookDto, ServiceDependencies, create_book as execute_create_book,
    delete_book as execute_delete_book, get_book_by_id as execute_get_book_by_id,
    list_books as execute_list_books, update_book as execute_update_book,
};
use crate::domain::value_objects::BookId;
use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
};
use std::sync::Arc;

use super::{
    error::ApiError,
    extract::BookPayload,
    types::{ListBooksQuery, ResponseData},
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

// ============================================================================
// Command handlers (POST / PUT / DELETE)
// ============================================================================

/// POST /api/books - 新しい書籍を作成
///
/// ISBNはサーバー側で生成され、リクエストのISBNは無視される。
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    BookPayload(input): BookPayload,
) -> Result<(StatusCode, Json<ResponseData<BookDto>>), ApiError> {
    let created = execute_create_book(&state.service_deps, input).await?;

    let response = ResponseData::success("Book created successfully", created);
    Ok((StatusCode::CREATED, Json(response)))
}

/// PUT /api/books/:id - 書籍を更新
///
/// 可変フィールドはすべて置き換えられる（部分更新なし）。
pub async fn update_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    BookPayload(input): BookPayload,
) -> Result<Json<ResponseData<BookDto>>, ApiError> {
    let id = BookId::from_string(id);

    let updated = execute_update_book(&state.service_deps, &id, input).await?;

    Ok(Json(ResponseData::success("Book updated successfully", updated)))
}

/// DELETE /api/books/:id - 書籍を削除
///
/// 成功時はボディなしの204を返す。
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = BookId::from_string(id);

    execute_delete_book(&state.service_deps, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /api/books - 書籍一覧をページ単位で取得
///
/// クエリパラメータ:
/// - page: ページ番号（0始まり、既定値0）
/// - size: ページサイズ（既定値10）
///
/// 書籍がない場合も200で空の一覧を返す。
pub async fn list_books(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ListBooksQuery>, QueryRejection>,
) -> Result<Json<ResponseData<Vec<BookDto>>>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let page = execute_list_books(&state.service_deps, query.page(), query.size()).await?;

    let message = if page.is_empty() {
        "No books found"
    } else {
        "Books fetched successfully"
    };

    Ok(Json(ResponseData::success(message, page.items)))
}

/// GET /api/books/:id - 書籍をIDで取得
///
/// 見つかった場合は書籍を返し、見つからない場合は404を返す。
pub async fn get_book_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ResponseData<BookDto>>, ApiError> {
    let id = BookId::from_string(id);

    let book = execute_get_book_by_id(&state.service_deps, &id).await?;

    let message = format!("Found book with id = {}", id);
    Ok(Json(ResponseData::success(message, book)))
}
