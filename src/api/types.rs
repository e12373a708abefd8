use serde::{Deserialize, Serialize};

/// ページ番号の既定値
pub const DEFAULT_PAGE: i64 = 0;

/// ページサイズの既定値
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// 書籍一覧取得のクエリパラメータ
#[derive(Debug, Default, Deserialize)]
pub struct ListBooksQuery {
    /// ページ番号（0始まり）
    pub page: Option<i64>,
    /// ページサイズ
    pub size: Option<i64>,
}

impl ListBooksQuery {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    pub fn size(&self) -> i64 {
        self.size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

/// 応答の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// 共通レスポンスエンベロープ
///
/// `{"status": "success"|"error", "message": "...", "data": T|null}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ResponseData<T> {
    pub status: ResponseStatus,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ResponseData<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn error(message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_query_defaults() {
        let query = ListBooksQuery::default();
        assert_eq!(query.page(), 0);
        assert_eq!(query.size(), 10);
    }

    #[test]
    fn test_envelope_shape() {
        let body = serde_json::to_value(ResponseData::success("ok", vec![1, 2])).unwrap();
        assert_eq!(body, json!({"status": "success", "message": "ok", "data": [1, 2]}));

        let body = serde_json::to_value(ResponseData::<()>::error("boom", None)).unwrap();
        assert_eq!(body, json!({"status": "error", "message": "boom", "data": null}));
    }
}
