//! # Notelog ドメイン層
//!
//! 外部テーブルの行をフロントエンド向けのフラットなレコードに
//! 正規化する変換コアを定義する。
//!
//! ## 設計方針
//!
//! このクレートは I/O を一切行わない。入力（行とプロパティブロック）は
//! 呼び出し側が所有し、このクレートは読み取りと新しい値の構築のみを行う:
//!
//! - **プロパティモデル**: タグ付きユニオンとしての外部プロパティ値
//!   （例: `created_time`, `title`, `relation`）と、タグごとの
//!   スカラー抽出規則
//! - **射影**: フィールドマッピング設定に基づく rename / 絞り込み /
//!   型アンラップ
//! - **名前正規化**: 人間向けカラム名から camelCase キーへの純粋変換
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → notion → domain
//! ```
//!
//! ドメイン層はインフラ層（HTTP クライアント）には一切依存しない。
//! すべての関数は純粋・再入可能で、リクエスト間の共有可変状態を持たない。
//!
//! ## モジュール構成
//!
//! - [`property`] - タグ付きプロパティブロックと値抽出
//! - [`page`] - 外部テーブルの 1 行（ページ）
//! - [`projection`] - フィールドマッピングとエンティティ射影
//! - [`normalize`] - カラム名の camelCase 正規化
//!
//! ## 使用例
//!
//! ```rust
//! use notelog_domain::{FieldMapping, project};
//!
//! let mapping = FieldMapping::builder()
//!     .field("Title")
//!     .field_as("Author", "authorId")
//!     .build()
//!     .unwrap();
//!
//! let entities = project(&mapping, &[]);
//! assert!(entities.is_empty());
//! ```

pub mod normalize;
pub mod page;
pub mod projection;
pub mod property;

pub use normalize::{CamelName, normalize_field_name, to_camel_case};
pub use page::Page;
pub use projection::{Entity, FieldMapping, ProjectionError, project};
pub use property::Property;
