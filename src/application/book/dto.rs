use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::{
    AUTHOR_PATTERN, ISBN_PATTERN, author_not_blank, price_in_range, published_in_past_or_present,
    title_not_blank,
};

/// 書籍の転送オブジェクト（外部に公開する形）
///
/// `isbn`はクライアントから受け取っても作成時には必ずサーバー側で上書きされる。
/// 必須項目の欠落はデシリアライズではなくバリデーションで検出するため、
/// すべてのフィールドに既定値を持たせている。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    #[validate(
        custom(function = "title_not_blank"),
        length(max = 100, message = "Title must not exceed 100 characters")
    )]
    pub title: String,

    #[serde(default)]
    #[validate(
        custom(function = "author_not_blank"),
        regex(
            path = *AUTHOR_PATTERN,
            message = "Author name can only contain letters, accents, and spaces"
        ),
        length(max = 50, message = "Author name must not exceed 50 characters")
    )]
    pub author: String,

    #[serde(default, with = "published_date_format")]
    #[validate(custom(function = "published_in_past_or_present"))]
    pub published_date: Option<NaiveDate>,

    #[serde(default)]
    #[validate(regex(path = *ISBN_PATTERN, message = "Invalid ISBN format"))]
    pub isbn: Option<String>,

    /// JSONの数値として読み書きする
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[validate(
        required(message = "Price must not be empty"),
        custom(function = "price_in_range")
    )]
    pub price: Option<Decimal>,
}

/// `publishedDate`のワイヤー形式（dd-MM-yyyy）
pub mod published_date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%d-%m-%Y";

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<String> = Option::deserialize(deserializer)?;
        value
            .map(|s| NaiveDate::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom))
            .transpose()
    }
}
