//! # カラム名正規化
//!
//! 人間向けのカラム名（例: `"Created time"`）を camelCase の
//! 内部キー（例: `createdTime`）へ変換する純粋関数を提供する。
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: 正規化済みの名前は [`CamelName`] でラップし、
//!   素の `String` と型レベルで区別する（実行時表現は変わらない）
//! - **決定性**: 同じ入力は常に同じ出力になる。状態を持たない

use derive_more::Display;
use serde::Serialize;

/// 正規化済み camelCase 名
///
/// [`to_camel_case`] / [`normalize_field_name`] を通してのみ生成される。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Display)]
#[display("{_0}")]
pub struct CamelName(String);

impl CamelName {
    /// 内部の文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 内部の文字列を取り出す
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for CamelName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// 単語区切りとして扱う文字
fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | '_' | '-')
}

/// 文字列を camelCase に変換する
///
/// 空白・カンマ・アンダースコア・ハイフンの連続で単語に分割し、
/// 先頭の単語はそのまま、2 語目以降は先頭 1 文字のみ大文字化して
/// 連結する。単語が 1 つだけの入力はそのまま返る。
///
/// ## 使用例
///
/// ```
/// use notelog_domain::normalize::to_camel_case;
///
/// assert_eq!(to_camel_case("default_value").as_str(), "defaultValue");
/// assert_eq!(to_camel_case("value").as_str(), "value");
/// ```
pub fn to_camel_case(input: &str) -> CamelName {
    let words = input.trim().split(is_separator).filter(|w| !w.is_empty());

    let mut result = String::new();
    for (index, word) in words.enumerate() {
        if index == 0 {
            result.push_str(word);
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }

    CamelName(result)
}

/// 外部カラム名を内部キーへ正規化する
///
/// 全体を小文字化してから [`to_camel_case`] を適用する
/// （`"Created time"` → `createdTime`）。
pub fn normalize_field_name(name: &str) -> CamelName {
    to_camel_case(&name.to_lowercase())
}
