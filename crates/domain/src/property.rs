//! # プロパティブロック
//!
//! 外部テーブルの 1 セルを表すタグ付きプロパティ値と、
//! タグごとのスカラー抽出規則を定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | 用語 | 内容 |
//! |---|------|------|
//! | [`Property`] | プロパティブロック | `type` タグ + タグ固有ペイロード |
//! | [`TextFragment`] | テキスト断片 | `title` / `rich_text` の要素 |
//! | [`FileAttachment`] | 添付ファイル | `files` の要素 |
//!
//! ## 設計方針
//!
//! - **タグ付きユニオン**: `type` タグによる判別共用体を enum の網羅的
//!   パターンマッチで表現する。新しいタグの追加は必ず明示的な
//!   フォールバック（[`Property::Other`]）を通る
//! - **前方互換**: 未知のタグはデシリアライズ失敗にせず、生の JSON を
//!   そのまま保持する
//! - **不変性**: ブロックは外部から受け取る読み取り専用のスナップショット。
//!   このシステムが構築・変更することはない

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// タグ付きプロパティブロック
///
/// `type` フィールドの値でペイロードの形が決まる。既知のタグは
/// 型付きで保持し、未知のタグは [`Other`](Property::Other) が
/// 生の JSON を保持する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Property {
    /// 作成日時（タイムスタンプ文字列）
    CreatedTime { created_time: String },
    /// 連番 ID
    UniqueId { unique_id: UniqueIdValue },
    /// タイトル（テキスト断片のシーケンス）
    Title { title: Vec<TextFragment> },
    /// 添付ファイルのシーケンス
    Files { files: Vec<FileAttachment> },
    /// メールアドレス
    Email { email: String },
    /// 他テーブルへの参照のシーケンス
    Relation { relation: Vec<RelationTarget> },
    /// リッチテキスト（テキスト断片のシーケンス）
    RichText { rich_text: Vec<TextFragment> },
    /// 単一選択
    Select { select: SelectOption },
    /// 未知のタグ（生の JSON を保持する）
    #[serde(untagged)]
    Other(Value),
}

/// 連番 ID のペイロード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniqueIdValue {
    pub number: i64,
    pub prefix: Option<String>,
}

/// テキスト断片
///
/// `title` と `rich_text` は同じアクセス経路（`text.content`）を持つ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFragment {
    pub text: TextContent,
}

/// テキスト断片の本文
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
}

/// 添付ファイル
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileAttachment {
    pub file: HostedFile,
}

/// ホスト済みファイルの所在
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostedFile {
    pub url: String,
}

/// 他テーブルへの参照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationTarget {
    pub id: String,
}

/// 選択肢
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id:    String,
    pub name:  String,
    pub color: String,
}

impl Property {
    /// ブロックをネイティブなスカラー値へ折りたたむ
    ///
    /// 純粋関数であり、どの入力に対しても失敗しない。シーケンスを持つ
    /// タグ（title / files / relation / rich_text）は先頭要素を採用し、
    /// 空シーケンスは欠損値（`null`）になる。未知のタグは生のブロックを
    /// そのまま返す。
    pub fn value(&self) -> Value {
        match self {
            Property::CreatedTime { created_time } => Value::String(created_time.clone()),
            Property::UniqueId { unique_id } => Value::from(unique_id.number),
            Property::Title { title } => first_text(title),
            Property::Files { files } => files
                .first()
                .map(|attachment| Value::String(attachment.file.url.clone()))
                .unwrap_or(Value::Null),
            Property::Email { email } => Value::String(email.clone()),
            Property::Relation { relation } => relation
                .first()
                .map(|target| Value::String(target.id.clone()))
                .unwrap_or(Value::Null),
            Property::RichText { rich_text } => first_text(rich_text),
            Property::Select { select } => Value::String(select.name.clone()),
            Property::Other(raw) => raw.clone(),
        }
    }
}

/// 先頭のテキスト断片の本文を取り出す。空なら欠損値
fn first_text(fragments: &[TextFragment]) -> Value {
    fragments
        .first()
        .map(|fragment| Value::String(fragment.text.content.clone()))
        .unwrap_or(Value::Null)
}
