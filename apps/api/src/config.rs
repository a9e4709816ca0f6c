//! # API 設定
//!
//! 環境変数から API サーバーの設定を読み込む。

use std::env;

/// PORT 未指定時のデフォルト
const DEFAULT_PORT: u16 = 8000;

/// API サーバーの設定
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
    /// Notion インテグレーションの API シークレット
    pub notion_api_secret: String,
    /// 記事データベースの ID
    pub articles_database_id: String,
    /// ユーザーデータベースの ID
    pub users_database_id: String,
}

impl ApiConfig {
    /// 環境変数から設定を読み込む
    ///
    /// `NOTION_API_SECRET` / `NOTION_ARTICLES_DATABASE_ID` /
    /// `NOTION_USERS_DATABASE_ID` は必須で、未設定の場合は起動時に
    /// そのまま失敗させる。
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_port(env::var("PORT").ok().as_deref()),
            notion_api_secret: env::var("NOTION_API_SECRET")
                .expect("NOTION_API_SECRET が設定されていません（.env を確認してください）"),
            articles_database_id: env::var("NOTION_ARTICLES_DATABASE_ID").expect(
                "NOTION_ARTICLES_DATABASE_ID が設定されていません（.env を確認してください）",
            ),
            users_database_id: env::var("NOTION_USERS_DATABASE_ID")
                .expect("NOTION_USERS_DATABASE_ID が設定されていません（.env を確認してください）"),
        })
    }
}

/// 環境変数の値からポート番号をパースする
///
/// 未設定の場合はデフォルトにフォールバックする。
fn parse_port(value: Option<&str>) -> u16 {
    match value {
        Some(raw) => raw
            .parse()
            .expect("PORT は有効なポート番号である必要があります"),
        None => DEFAULT_PORT,
    }
}
