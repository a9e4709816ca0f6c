//! # Notion データベースクライアント
//!
//! データベースクエリ API の呼び出しを担当する。

use async_trait::async_trait;

use crate::{
    error::NotionError,
    response::handle_response,
    types::{QueryDatabaseRequest, QueryDatabaseResponse},
};

/// Notion API のベース URL
const DEFAULT_BASE_URL: &str = "https://api.notion.com";

/// 使用する Notion API バージョン（`Notion-Version` ヘッダー）
const NOTION_VERSION: &str = "2022-06-28";

/// Notion データベースクライアントトレイト
///
/// ハンドラは `Arc<dyn NotionDatabaseClient>` に依存し、
/// テストではスタブ実装を注入する。
#[async_trait]
pub trait NotionDatabaseClient: Send + Sync {
    /// データベースの行を問い合わせる
    ///
    /// `POST /v1/databases/{database_id}/query` を呼び出す。
    ///
    /// # 引数
    ///
    /// - `database_id`: 問い合わせ対象のデータベース ID
    /// - `request`: ソート条件等のクエリボディ
    async fn query_database(
        &self,
        database_id: &str,
        request: &QueryDatabaseRequest,
    ) -> Result<QueryDatabaseResponse, NotionError>;
}

/// Notion クライアント実装
#[derive(Clone)]
pub struct NotionClient {
    base_url: String,
    secret:   String,
    client:   reqwest::Client,
}

impl NotionClient {
    /// 新しいクライアントを作成する
    ///
    /// # 引数
    ///
    /// - `secret`: インテグレーションの API シークレット
    pub fn new(secret: &str) -> Self {
        Self::with_base_url(secret, DEFAULT_BASE_URL)
    }

    /// ベース URL を指定してクライアントを作成する（テスト用）
    pub fn with_base_url(secret: &str, base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            secret:   secret.to_string(),
            client:   reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl NotionDatabaseClient for NotionClient {
    async fn query_database(
        &self,
        database_id: &str,
        request: &QueryDatabaseRequest,
    ) -> Result<QueryDatabaseResponse, NotionError> {
        let url = format!("{}/v1/databases/{}/query", self.base_url, database_id);

        tracing::debug!(database_id, "データベースをクエリします");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.secret)
            .header("Notion-Version", NOTION_VERSION)
            .json(request)
            .send()
            .await?;

        handle_response(response).await
    }
}
