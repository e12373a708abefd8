//! Book catalog service
//!
//! 書籍レコードの作成・一覧・取得・更新・削除を提供する。
//! ISBN-13はサーバー側で生成し、一意性はRecord Storeの制約で保証する。

pub mod adapters;
pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use config::AppConfig;
