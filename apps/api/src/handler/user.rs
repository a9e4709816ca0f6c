//! # ユーザー API ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /api/users` - ユーザー一覧

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use notelog_domain::{Entity, FieldMapping, project};
use notelog_notion::{NotionDatabaseClient, NotionError, QueryDatabaseRequest};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::log_and_convert_upstream_error;

/// ユーザー API の共有状態
pub struct UserState {
    pub notion:            Arc<dyn NotionDatabaseClient>,
    pub users_database_id: String,
    pub user_fields:       FieldMapping,
}

/// ユーザーエンドポイントのフィールドマッピング
///
/// 外部カラム名 {Name, Role, Email, Password} を内部キー
/// {name, role, email, password} へ対応付ける。
pub fn user_field_mapping() -> FieldMapping {
    FieldMapping::builder()
        .field("Name")
        .field("Role")
        .field("Email")
        .field("Password")
        .build()
        .expect("ユーザーのフィールドマッピングが不正です")
}

// --- レスポンス型 ---

/// ユーザー一覧レスポンス
#[derive(Debug, Serialize, ToSchema)]
pub struct UsersResponse {
    #[schema(value_type = Vec<Object>)]
    pub users: Vec<Entity>,
}

// --- ハンドラ ---

/// GET /api/users
///
/// ユーザーデータベースの行を射影して返す。
/// 上流クエリの失敗は握りつぶさず、リクエスト全体を失敗させる。
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    responses(
        (status = 200, description = "ユーザー一覧", body = UsersResponse),
        (status = 500, description = "上流クエリ失敗", body = notelog_shared::ErrorResponse)
    )
)]
pub async fn list_users(State(state): State<Arc<UserState>>) -> impl IntoResponse {
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

    (StatusCode::OK, Json(UsersResponse { users })).into_response()
}

/// ユーザーデータベースをクエリし、エンティティへ射影する
///
/// 記事エンドポイントからも呼ばれる（レスポンスにユーザー一覧を同梱するため）。
pub(crate) async fn fetch_users(
    notion: &dyn NotionDatabaseClient,
    database_id: &str,
    fields: &FieldMapping,
) -> Result<Vec<Entity>, NotionError> {
    let response = notion
        .query_database(database_id, &QueryDatabaseRequest::unsorted())
        .await?;

    Ok(project(fields, &response.results))
}
