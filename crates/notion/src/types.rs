//! # データベースクエリの wire 型
//!
//! `POST /v1/databases/{database_id}/query` のリクエストボディと
//! レスポンスボディを定義する。

use notelog_domain::Page;
use serde::{Deserialize, Serialize};

/// ソート方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// ソート条件
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sort {
    /// ソート対象のプロパティ名
    pub property:  String,
    /// ソート方向
    pub direction: SortDirection,
}

impl Sort {
    /// 昇順ソート条件を作成する
    pub fn ascending(property: impl Into<String>) -> Self {
        Self {
            property:  property.into(),
            direction: SortDirection::Ascending,
        }
    }
}

/// データベースクエリのリクエストボディ
///
/// ソート条件を持たない場合、`sorts` キーはボディから省略される。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryDatabaseRequest {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sorts: Vec<Sort>,
}

impl QueryDatabaseRequest {
    /// ソートなしのクエリを作成する
    pub fn unsorted() -> Self {
        Self::default()
    }

    /// 指定したソート条件のクエリを作成する
    pub fn sorted_by(sort: Sort) -> Self {
        Self { sorts: vec![sort] }
    }
}

/// データベースクエリのレスポンスボディ
///
/// カーソル追跡は行わないため、`results` のみを取り込む
/// （1 ページ目を越えるページングはスコープ外）。
#[derive(Debug, Clone, Deserialize)]
pub struct QueryDatabaseResponse {
    /// クエリ時点の行のスナップショット
    pub results: Vec<Page>,
}
