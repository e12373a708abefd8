use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::BookId;

/// 書籍レコード（永続化される形）
///
/// 識別子とISBNはサーバー側でのみ採番される。
/// `id`が`None`なのは初回書き込み前のみ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    pub id: Option<BookId>,
    pub title: String,
    pub author: String,
    pub published_date: Option<NaiveDate>,
    pub isbn: String,
    pub price: Decimal,
}

impl BookRecord {
    /// 初回書き込み直前の既定値を適用する
    ///
    /// Record Storeのアダプターが新規レコードの保存直前に呼び出す。
    /// 出版日が未指定なら書き込み日を設定する。
    pub fn apply_defaults(&mut self, today: NaiveDate) {
        if self.published_date.is_none() {
            self.published_date = Some(today);
        }
    }
}
