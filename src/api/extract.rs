use crate::application::book::{BookDto, validate_book};
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};

use super::error::ApiError;

/// 作成・更新リクエストのボディ
///
/// ボディが空の場合は`None`（入力なし）としてサービスに渡し、
/// それ以外はJSONとして読み取ったうえでフィールド制約を検証する。
#[derive(Debug)]
pub struct BookPayload(pub Option<BookDto>);

#[async_trait]
impl<S> FromRequest<S> for BookPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read request body: {}", e)))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(BookPayload(None));
        }

        let input: Option<BookDto> = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::bad_request(format!("Malformed request body: {}", e)))?;

        if let Some(input) = &input {
            validate_book(input)?;
        }

        Ok(BookPayload(input))
    }
}
