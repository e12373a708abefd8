use crate::application::book::{BookApplicationError, violation_messages};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ResponseData;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub struct ApiError(BookApplicationError);

impl ApiError {
    /// リクエストの形式不正（JSONの構文エラー、クエリの型不一致など）
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError(BookApplicationError::InvalidArgument(message.into()))
    }
}

impl From<BookApplicationError> for ApiError {
    fn from(err: BookApplicationError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, data) = match self.0 {
            // 404 Not Found - リクエストされたリソースが存在しない
            BookApplicationError::NotFound(_) => (StatusCode::NOT_FOUND, self.0.to_string(), None),

            // 400 Bad Request - 入力の問題
            BookApplicationError::ValidationFailure(ref errors) => {
                let details = serde_json::to_value(violation_messages(errors)).ok();
                (
                    StatusCode::BAD_REQUEST,
                    "Validation failed".to_string(),
                    details,
                )
            }
            BookApplicationError::DuplicateIsbn(_) => {
                (StatusCode::BAD_REQUEST, self.0.to_string(), None)
            }
            BookApplicationError::InvalidArgument(ref msg) => {
                (StatusCode::BAD_REQUEST, msg.clone(), None)
            }

            // 500 Internal Server Error - システム障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            BookApplicationError::Unexpected(ref e) => {
                tracing::error!("Unexpected error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                    None,
                )
            }
        };

        let body = Json(ResponseData::<serde_json::Value>::error(message, data));
        (status, body).into_response()
    }
}
