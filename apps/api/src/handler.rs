//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュールで re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、変換ロジックはドメイン層
//!   （[`notelog_domain::project`]）に委譲
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェックとアプリケーションバナー
//! - `article`: 記事一覧（ユーザー一覧を同梱）
//! - `user`: ユーザー一覧

pub mod article;
pub mod health;
pub mod user;

pub use article::{ArticleState, article_field_mapping, list_articles};
pub use health::{app_status, health_check};
pub use user::{UserState, list_users, user_field_mapping};
