//! # Notelog API サーバー
//!
//! フロントエンド専用の読み取り API サーバー。
//!
//! ## 役割
//!
//! 外部データソース（Notion データベース）とフロントエンドの間に位置し、
//! 以下の責務を担う:
//!
//! - **レスポンス最適化**: タグ付きプロパティ行をフロントエンドに最適な
//!   フラットな JSON レコードに変換
//! - **アグリゲーション**: 記事エンドポイントで記事とユーザーを
//!   1 レスポンスにまとめる
//! - **シークレットの隔離**: Notion API シークレットをサーバー側に留める
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   Browser    │────▶│  Notelog API │────▶│    Notion    │
//! │  (Frontend)  │     │  port: 8000  │     │   REST API   │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! ## 環境変数
//!
//! 設定は `.env` ファイルまたは環境変数で与える（`.env.example` 参照）。
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `PORT` | No | ポート番号（デフォルト: `8000`） |
//! | `NOTION_API_SECRET` | **Yes** | インテグレーションの API シークレット |
//! | `NOTION_ARTICLES_DATABASE_ID` | **Yes** | 記事データベースの ID |
//! | `NOTION_USERS_DATABASE_ID` | **Yes** | ユーザーデータベースの ID |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p notelog-api
//!
//! # 本番環境（環境変数を直接指定）
//! NOTION_API_SECRET=secret_... PORT=8000 cargo run -p notelog-api --release
//! ```

mod config;

use std::{net::SocketAddr, sync::Arc};

use axum::{Router, routing::get};
use config::ApiConfig;
use handler::{ArticleState, UserState};
use notelog_api::handler;
use notelog_notion::{NotionClient, NotionDatabaseClient};
use notelog_shared::observability::{MakeRequestUuidV7, TracingConfig, make_request_span};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

/// API サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. Notion クライアントとフィールドマッピングの構築
/// 5. ルーターの構築と HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    // 本番環境では .env ファイルは使用せず、環境変数を直接設定する
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("api");
    notelog_shared::observability::init_tracing(tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "api").entered();

    // 設定読み込み（必須の環境変数が欠けていればここで起動失敗）
    let config = ApiConfig::from_env().expect("設定の読み込みに失敗しました");

    tracing::info!("API サーバーを起動します: {}:{}", config.host, config.port);

    // 依存関係の初期化
    // クライアントは起動時に一度だけ構築し、各ハンドラへ明示的に注入する
    let notion: Arc<dyn NotionDatabaseClient> =
        Arc::new(NotionClient::new(&config.notion_api_secret));

    // フィールドマッピングはエンドポイントごとに一度だけ構築する
    let article_state = Arc::new(ArticleState {
        notion:               notion.clone(),
        articles_database_id: config.articles_database_id.clone(),
        users_database_id:    config.users_database_id.clone(),
        article_fields:       handler::article_field_mapping(),
        user_fields:          handler::user_field_mapping(),
    });

    let user_state = Arc::new(UserState {
        notion,
        users_database_id: config.users_database_id,
        user_fields: handler::user_field_mapping(),
    });

    // ルーター構築
    // Request ID + TraceLayer により、すべての HTTP リクエストに
    // request_id が付与されログに自動注入される
    let app = Router::new()
        .route("/health", get(handler::health_check))
        .route("/api", get(handler::app_status))
        .route("/api/users", get(handler::list_users))
        .with_state(user_state)
        .route("/api/articles", get(handler::list_articles))
        .with_state(article_state)
        // Request ID レイヤー（レイヤー順序が重要: 下に書いたものが外側）
        // 1. SetRequestIdLayer（最外）: リクエスト受信時に UUID v7 を生成
        //    （またはクライアント提供値を使用）
        // 2. TraceLayer: カスタムスパンに request_id を含め、全ログに自動注入
        // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("アドレスのパースに失敗しました");

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("API サーバーが起動しました: {}", addr);

    // Graceful shutdown は axum::serve が自動的に処理する
    axum::serve(listener, app).await?;

    Ok(())
}
