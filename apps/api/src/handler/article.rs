//! # 記事 API ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /api/articles` - 記事一覧（ユーザー一覧を同梱）
//!
//! フロントエンドが記事と著者を 1 リクエストで描画できるように、
//! 記事一覧のレスポンスにはユーザー一覧も含める（アグリゲーション）。

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use notelog_domain::{Entity, FieldMapping, project};
use notelog_notion::{NotionDatabaseClient, NotionError, QueryDatabaseRequest, Sort};
use serde::Serialize;
use utoipa::ToSchema;

use super::user::fetch_users;
use crate::error::log_and_convert_upstream_error;

/// 記事一覧のソート対象プロパティ
const ARTICLE_SORT_PROPERTY: &str = "ID";

/// 記事 API の共有状態
pub struct ArticleState {
    pub notion:               Arc<dyn NotionDatabaseClient>,
    pub articles_database_id: String,
    pub users_database_id:    String,
    pub article_fields:       FieldMapping,
    pub user_fields:          FieldMapping,
}

/// 記事エンドポイントのフィールドマッピング
///
/// 外部カラム名 {Title, Preview, Created time, Author} を内部キー
/// {title, preview, createdTime, authorId} へ対応付ける。
pub fn article_field_mapping() -> FieldMapping {
    FieldMapping::builder()
        .field("Title")
        .field("Preview")
        .field("Created time")
        .field_as("Author", "authorId")
        .build()
        .expect("記事のフィールドマッピングが不正です")
}

// --- レスポンス型 ---

/// 記事一覧レスポンス
///
/// 記事クエリが失敗した場合、`articles` キーはボディから省略される
/// （ステータスは 200 のまま）。ユーザークエリの失敗はリクエスト全体を
/// 失敗させる。
#[derive(Debug, Serialize, ToSchema)]
pub struct ArticlesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Vec<Object>>)]
    pub articles: Option<Vec<Entity>>,
    #[schema(value_type = Vec<Object>)]
    pub users:    Vec<Entity>,
}

// --- ハンドラ ---

/// GET /api/articles
///
/// 記事データベース（ID 昇順）とユーザーデータベースを順にクエリし、
/// それぞれ射影して返す。2 つのクエリは逐次実行される。
#[utoipa::path(
    get,
    path = "/api/articles",
    tag = "articles",
    responses(
        (status = 200, description = "記事一覧とユーザー一覧", body = ArticlesResponse),
        (status = 500, description = "ユーザークエリ失敗", body = notelog_shared::ErrorResponse)
    )
)]
pub async fn list_articles(State(state): State<Arc<ArticleState>>) -> impl IntoResponse {
    // 記事クエリの失敗のみ握りつぶし、キーごと省略して 200 を返す
    let articles = match fetch_articles(
        state.notion.as_ref(),
        &state.articles_database_id,
        &state.article_fields,
    )
    .await
    {
        Ok(articles) => Some(articles),
        Err(e) => {
            tracing::error!(
                error.category = "external_service",
                error.kind = "upstream_query",
                "記事一覧取得で上流エラー: {}",
                e
            );
            None
        }
    };

    let users = match fetch_users(
        state.notion.as_ref(),
        &state.users_database_id,
        &state.user_fields,
    )
    .await
    {
        Ok(users) => users,
        Err(e) => return log_and_convert_upstream_error("ユーザー一覧取得", &e),
    };

    (StatusCode::OK, Json(ArticlesResponse { articles, users })).into_response()
}

/// 記事データベースを ID 昇順でクエリし、エンティティへ射影する
async fn fetch_articles(
    notion: &dyn NotionDatabaseClient,
    database_id: &str,
    fields: &FieldMapping,
) -> Result<Vec<Entity>, NotionError> {
    let request = QueryDatabaseRequest::sorted_by(Sort::ascending(ARTICLE_SORT_PROPERTY));
    let response = notion.query_database(database_id, &request).await?;

    Ok(project(fields, &response.results))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_article_field_mappingが4フィールドを対応付ける() {
        let mapping = article_field_mapping();

        assert_eq!(mapping.len(), 4);
        assert_eq!(mapping.internal_key("Title").unwrap().as_str(), "title");
        assert_eq!(mapping.internal_key("Preview").unwrap().as_str(), "preview");
        assert_eq!(
            mapping.internal_key("Created time").unwrap().as_str(),
            "createdTime"
        );
        assert_eq!(
            mapping.internal_key("Author").unwrap().as_str(),
            "authorId"
        );
    }

    #[test]
    fn test_articlesがnoneのときキーが省略される() {
        let response = ArticlesResponse {
            articles: None,
            users:    vec![],
        };
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json, serde_json::json!({ "users": [] }));
    }

    #[test]
    fn test_articlesがsomeのときキーが出力される() {
        let response = ArticlesResponse {
            articles: Some(vec![]),
            users:    vec![],
        };
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json, serde_json::json!({ "articles": [], "users": [] }));
    }
}
