//! # Notelog Notion クライアント層
//!
//! 外部データソース（Notion データベース）との通信を担当する
//! インフラストラクチャ層。
//!
//! ## 設計方針
//!
//! クライアントはトレイト（[`NotionDatabaseClient`]）で抽象化し、
//! ハンドラへは `Arc<dyn NotionDatabaseClient>` として明示的に注入する。
//! モジュールレベルの共有可変ハンドルは持たない。テストでは
//! トレイトのスタブ実装を使用できる。
//!
//! ## 依存関係
//!
//! ```text
//! api → notion → domain
//! ```
//!
//! レスポンスの行モデル（[`notelog_domain::Page`]）はドメイン層の型を
//! そのまま使用する。ドメイン層はこのクレートに依存しない。
//!
//! ## モジュール構成
//!
//! - [`client`] - クライアントトレイトと reqwest 実装
//! - [`error`] - クライアントエラー定義
//! - [`types`] - クエリリクエスト / レスポンスの wire 型

pub mod client;
pub mod error;
mod response;
pub mod types;

pub use client::{NotionClient, NotionDatabaseClient};
pub use error::NotionError;
pub use types::{QueryDatabaseRequest, QueryDatabaseResponse, Sort, SortDirection};
