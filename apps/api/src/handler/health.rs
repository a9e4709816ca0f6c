//! # ヘルスチェックハンドラ
//!
//! API の稼働状態を確認するためのエンドポイント。
//!
//! - `/health` — Liveness Check（常に `"healthy"` を返す）
//! - `/api` — フロントエンド向けのアプリケーションバナー

use axum::Json;
use notelog_shared::HealthResponse;
use serde::Serialize;
use utoipa::ToSchema;

/// アプリケーションバナーレスポンス
#[derive(Debug, Serialize, ToSchema)]
pub struct AppStatusResponse {
    pub application: String,
}

/// API のヘルスチェックエンドポイント
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "サーバー稼働中", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status:  "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api
///
/// アプリケーションが応答可能であることを示すバナーを返す
#[utoipa::path(
    get,
    path = "/api",
    tag = "health",
    responses(
        (status = 200, description = "アプリケーション稼働中", body = AppStatusResponse)
    )
)]
pub async fn app_status() -> Json<AppStatusResponse> {
    Json(AppStatusResponse {
        application: "worked".to_string(),
    })
}
