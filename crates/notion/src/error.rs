//! Notion クライアントのエラー型

use thiserror::Error;

/// Notion クライアントエラー
#[derive(Debug, Clone, Error)]
pub enum NotionError {
    /// API シークレットが無効（401）
    #[error("API シークレットが無効です")]
    Unauthorized,

    /// データベースが見つからない、または統合に共有されていない（404）
    #[error("データベースが見つかりません")]
    ObjectNotFound,

    /// リクエストが不正（400）
    #[error("リクエストが不正です: {0}")]
    InvalidRequest(String),

    /// レート制限超過（429）
    #[error("レート制限を超過しました")]
    RateLimited,

    /// ネットワークエラー
    #[error("ネットワークエラー: {0}")]
    Network(String),

    /// 予期しないエラー
    #[error("予期しないエラー: {0}")]
    Unexpected(String),
}

impl From<reqwest::Error> for NotionError {
    fn from(err: reqwest::Error) -> Self {
        NotionError::Network(err.to_string())
    }
}
