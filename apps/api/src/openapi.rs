//! # OpenAPI 仕様定義
//!
//! utoipa を使用して API の OpenAPI 仕様を Rust の型から自動生成する。
//! `ApiDoc::openapi()` で OpenAPI ドキュメントを取得できる。

use utoipa::OpenApi;

use crate::handler::{article, health, user};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Notelog API",
        version = "0.1.0",
        description = "Notion データベースをソースとする読み取り専用コンテンツ API"
    ),
    paths(
        // health
        health::health_check,
        health::app_status,
        // articles
        article::list_articles,
        // users
        user::list_users,
    ),
    components(schemas(
        notelog_shared::ErrorResponse,
    )),
    tags(
        (name = "health", description = "ヘルスチェック"),
        (name = "articles", description = "記事一覧"),
        (name = "users", description = "ユーザー一覧"),
    )
)]
pub struct ApiDoc;
