//! # ページ（外部テーブルの 1 行）
//!
//! クエリ時点の外部レコードのスナップショットを表す。
//! 変更されることはなく、1 リクエストを越えるライフサイクルを持たない。

use indexmap::IndexMap;
use serde::Deserialize;

use crate::property::Property;

/// 外部テーブルの 1 行
///
/// 不透明な識別子と、外部フィールド名 → プロパティブロックの
/// マッピングを持つ。フィールドの順序はレスポンス内の出現順を保持する。
///
/// `properties` を持たない行（部分レスポンス等）も存在するため
/// `Option` で表現する。射影時の形チェック（[`crate::project`]）で
/// そのような行は黙って除外される。
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page {
    /// 行の識別子（不透明な文字列）
    pub id: String,
    /// 外部フィールド名 → プロパティブロック
    #[serde(default)]
    pub properties: Option<IndexMap<String, Property>>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_propertiesを持つページをデシリアライズする() {
        let page: Page = serde_json::from_value(json!({
            "id": "r1",
            "properties": {
                "Email": { "type": "email", "email": "x@y.com" },
            },
        }))
        .unwrap();

        assert_eq!(page.id, "r1");
        let properties = page.properties.unwrap();
        assert_eq!(properties.len(), 1);
        assert!(properties.contains_key("Email"));
    }

    #[test]
    fn test_propertiesを持たないページはnoneになる() {
        let page: Page = serde_json::from_value(json!({ "id": "r2" })).unwrap();

        assert_eq!(page.id, "r2");
        assert!(page.properties.is_none());
    }

    #[test]
    fn test_フィールドの出現順が保持される() {
        let page: Page = serde_json::from_value(json!({
            "id": "r3",
            "properties": {
                "Zeta": { "type": "email", "email": "z@y.com" },
                "Alpha": { "type": "email", "email": "a@y.com" },
            },
        }))
        .unwrap();

        let names: Vec<&String> = page.properties.as_ref().unwrap().keys().collect();
        assert_eq!(names, ["Zeta", "Alpha"]);
    }
}
