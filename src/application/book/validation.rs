use chrono::{NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::borrow::Cow;
use std::collections::BTreeMap;
use validator::{Validate, ValidationError, ValidationErrors};

use super::dto::BookDto;
use super::errors::{BookApplicationError, Result};

/// タイトルの最大文字数
pub const TITLE_MAX_LEN: usize = 100;

/// 著者名の最大文字数
pub const AUTHOR_MAX_LEN: usize = 50;

/// 価格の小数部の最大桁数
pub const PRICE_MAX_SCALE: u32 = 2;

/// 価格の上限（この値を含まない）。格納先はNUMERIC(10, 2)
pub const PRICE_UPPER_BOUND: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 0);

/// 著者名：文字（アクセント付きを含む）と空白のみ
///
/// 空文字列は`author_not_blank`が報告するため、ここでは一致させる。
pub(super) static AUTHOR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{M}\s]*$").expect("author pattern must compile"));

/// ISBN-10/ISBN-13の形式
pub(super) static ISBN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(978|979)?[0-9]{9}([0-9]|X)$").expect("isbn pattern must compile")
});

fn violation(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

// ============================================================================
// フィールド単位のカスタム規則（BookDtoのderiveから呼ばれる）
// ============================================================================

pub(super) fn title_not_blank(title: &str) -> std::result::Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(violation("not_blank", "Title must not be empty"));
    }
    Ok(())
}

pub(super) fn author_not_blank(author: &str) -> std::result::Result<(), ValidationError> {
    if author.trim().is_empty() {
        return Err(violation("not_blank", "Author must not be empty"));
    }
    Ok(())
}

/// 出版日は今日（UTC）以前であること
pub(super) fn published_in_past_or_present(
    date: &NaiveDate,
) -> std::result::Result<(), ValidationError> {
    published_on_or_before(*date, Utc::now().date_naive())
}

/// 基準日を指定した出版日の規則
pub fn published_on_or_before(
    date: NaiveDate,
    today: NaiveDate,
) -> std::result::Result<(), ValidationError> {
    if date > today {
        return Err(violation(
            "past_or_present",
            "Published date must be in the present or past",
        ));
    }
    Ok(())
}

/// 価格は正で、小数部2桁以内、かつ上限未満であること
pub(super) fn price_in_range(price: &Decimal) -> std::result::Result<(), ValidationError> {
    if *price <= Decimal::ZERO {
        return Err(violation("decimal_min", "Price must be greater than 0"));
    }
    if price.normalize().scale() > PRICE_MAX_SCALE {
        return Err(violation(
            "decimal_scale",
            "Price must have at most 2 decimal places",
        ));
    }
    if *price >= PRICE_UPPER_BOUND {
        return Err(violation(
            "decimal_max",
            "Price must be less than 100000000",
        ));
    }
    Ok(())
}

/// 入力を検証し、違反があれば`ValidationFailure`として返す
///
/// 作成・更新の境界でサービス呼び出し前に適用する。
pub fn validate_book(input: &BookDto) -> Result<()> {
    input
        .validate()
        .map_err(BookApplicationError::ValidationFailure)
}

/// 構造体のフィールド名をワイヤー上のキー（camelCase）に変換する
fn wire_name(field: &str) -> String {
    let mut name = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            name.extend(c.to_uppercase());
            upper = false;
        } else {
            name.push(c);
        }
    }
    name
}

/// 違反をワイヤー上のフィールド名ごとのメッセージ一覧に変換する
pub fn violation_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (wire_name(&field), messages)
        })
        .collect()
}
