//! # Notelog API サーバーライブラリ
//!
//! フロントエンド専用の読み取り API サーバーのコアモジュール。
//!
//! ## モジュール構成
//!
//! - `error`: 上流エラーの HTTP レスポンス変換
//! - `handler`: HTTP ハンドラ
//! - `openapi`: OpenAPI 仕様定義

pub mod error;
pub mod handler;
pub mod openapi;
