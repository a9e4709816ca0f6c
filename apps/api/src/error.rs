//! # API エラーハンドリング
//!
//! 上流（Notion）クエリ失敗の HTTP レスポンスへの変換を集約する。
//!
//! 上流のエラー内容はクライアントへ開示しない。レート制限のみ 503 で
//! 区別し、それ以外の失敗は詳細を伏せた 500 に落とす。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use notelog_notion::NotionError;
use notelog_shared::ErrorResponse;

/// 上流クエリ失敗をレスポンスへ変換する
pub fn upstream_error_response(err: &NotionError) -> Response {
    match err {
        NotionError::RateLimited => service_unavailable_response(),
        _ => internal_error_response(),
    }
}

/// 上流エラーをログ付きでレスポンスに変換する
///
/// `context` には操作名（例: `"ユーザー一覧取得"`）を渡す。
pub fn log_and_convert_upstream_error(context: &str, err: &NotionError) -> Response {
    tracing::error!(
        error.category = "external_service",
        error.kind = "upstream_query",
        "{}で上流エラー: {}",
        context,
        err
    );
    upstream_error_response(err)
}

/// 内部エラーレスポンス
pub fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::internal_error()),
    )
        .into_response()
}

/// 上流サービス利用不可レスポンス
pub fn service_unavailable_response() -> Response {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ErrorResponse::service_unavailable(
            "上流サービスが一時的に利用できません",
        )),
    )
        .into_response()
}
