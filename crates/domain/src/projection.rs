//! # エンティティ射影
//!
//! フィールドマッピング設定に基づいて、外部テーブルの行の集合を
//! フラットなエンティティの列に変換する。
//!
//! ## 設計方針
//!
//! - **マッピングは検証済みの設定**: 呼び出し地点ごとのアドホックな
//!   rename テーブルではなく、(外部名, 内部キー) の順序付きリストとして
//!   一度だけ構築し、構築時に外部名の重複を拒否する
//! - **黙殺による除外**: マッピングにない外部フィールド、形チェックに
//!   失敗した行は、エラーにせず出力から落とす
//! - **純粋性**: 入力を変更せず、入力への参照を保持しない。
//!   同じ入力は常に同じ出力になる

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::{
    normalize::{CamelName, normalize_field_name, to_camel_case},
    page::Page,
};

/// 射影設定のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    /// 外部フィールド名が重複している
    #[error("フィールドマッピングの外部名が重複しています: {name}")]
    DuplicateField { name: String },
}

/// 1 フィールド分の rename 規則
#[derive(Debug, Clone, PartialEq)]
struct FieldRule {
    external: String,
    internal: CamelName,
}

/// フィールドマッピング設定
///
/// 外部フィールド名 → 内部キーの順序付き対応表。エンドポイントごとに
/// 一度だけ構築され、プロセスの生存期間中は不変。
///
/// ## 使用例
///
/// ```
/// use notelog_domain::FieldMapping;
///
/// let mapping = FieldMapping::builder()
///     .field("Created time")          // 内部キーは正規化で導出: createdTime
///     .field_as("Author", "authorId") // 内部キーを明示
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     mapping.internal_key("Created time").unwrap().as_str(),
///     "createdTime"
/// );
/// assert!(mapping.internal_key("Extra").is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMapping {
    rules: Vec<FieldRule>,
}

impl FieldMapping {
    /// ビルダーを作成する
    pub fn builder() -> FieldMappingBuilder {
        FieldMappingBuilder { rules: Vec::new() }
    }

    /// 外部名に対応する内部キーを引く
    ///
    /// マッピングに含まれない外部名は `None`。
    pub fn internal_key(&self, external: &str) -> Option<&CamelName> {
        self.rules
            .iter()
            .find(|rule| rule.external == external)
            .map(|rule| &rule.internal)
    }

    /// 登録済みフィールド数
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// マッピングが空かどうか
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// [`FieldMapping`] のビルダー
#[derive(Debug)]
pub struct FieldMappingBuilder {
    rules: Vec<FieldRule>,
}

impl FieldMappingBuilder {
    /// 外部フィールドを取り込む。内部キーは外部名の正規化で導出する
    ///
    /// `"Created time"` → `createdTime` のように、小文字化 + camelCase
    /// 変換（[`normalize_field_name`]）が内部キーになる。
    pub fn field(mut self, external: &str) -> Self {
        self.rules.push(FieldRule {
            external: external.to_string(),
            internal: normalize_field_name(external),
        });
        self
    }

    /// 外部フィールドを明示した内部キーで取り込む
    ///
    /// 正規化では導出できないキー（例: `Author` → `authorId`）に使う。
    pub fn field_as(mut self, external: &str, internal: &str) -> Self {
        self.rules.push(FieldRule {
            external: external.to_string(),
            internal: to_camel_case(internal),
        });
        self
    }

    /// マッピングを確定する
    ///
    /// 外部名の重複を拒否する（マッピング不変条件）。
    pub fn build(self) -> Result<FieldMapping, ProjectionError> {
        for (index, rule) in self.rules.iter().enumerate() {
            if self.rules[..index]
                .iter()
                .any(|prev| prev.external == rule.external)
            {
                return Err(ProjectionError::DuplicateField {
                    name: rule.external.clone(),
                });
            }
        }

        Ok(FieldMapping { rules: self.rules })
    }
}

/// 射影結果の 1 レコード
///
/// `id` と、マッピングされたフィールドの順序付き集合からなる。
/// シリアライズ時にフィールドはトップレベルへフラット化される
/// （`{ "id": ..., "title": ..., ... }`）。
///
/// 不変条件: `id` 以外のキーはすべてマッピングの内部キー集合に属する。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    /// 行の識別子
    pub id: String,
    /// 内部キー → 抽出済みスカラー値（行内の出現順）
    #[serde(flatten)]
    pub fields: IndexMap<String, Value>,
}

/// 行の集合をエンティティの列へ射影する
///
/// 各行について:
///
/// 1. `properties` を持たない行は黙って除外する（形チェック）
/// 2. 行のフィールドを出現順に走査し、マッピングにない外部名は飛ばす
/// 3. マッピングされた外部名は内部キーに rename し、値はブロックの
///    抽出規則（[`Property::value`](crate::Property::value)）で折りたたむ
/// 4. `{ id, ...フィールド }` を組み立てる。1 フィールドも一致しなくても
///    `id` だけのレコードを出力する
///
/// 出力は行の順序を保持する。ソート・ページング・id の重複排除は行わない。
pub fn project(mapping: &FieldMapping, pages: &[Page]) -> Vec<Entity> {
    pages
        .iter()
        .filter_map(|page| {
            let properties = page.properties.as_ref()?;

            let mut fields = IndexMap::new();
            for (external, block) in properties {
                let Some(key) = mapping.internal_key(external) else {
                    continue;
                };
                fields.insert(key.as_str().to_string(), block.value());
            }

            Some(Entity {
                id: page.id.clone(),
                fields,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    // --- テスト用ヘルパー ---

    /// 記事エンドポイント相当のマッピング
    fn article_mapping() -> FieldMapping {
        FieldMapping::builder()
            .field("Title")
            .field_as("Author", "authorId")
            .build()
            .unwrap()
    }

    fn page_from_json(value: serde_json::Value) -> Page {
        serde_json::from_value(value).unwrap()
    }

    // --- FieldMapping ---

    #[test]
    fn test_fieldが正規化で内部キーを導出する() {
        let mapping = FieldMapping::builder()
            .field("Created time")
            .build()
            .unwrap();

        assert_eq!(
            mapping.internal_key("Created time").unwrap().as_str(),
            "createdTime"
        );
    }

    #[test]
    fn test_field_asが明示キーを採用する() {
        let mapping = FieldMapping::builder()
            .field_as("Author", "authorId")
            .build()
            .unwrap();

        assert_eq!(mapping.internal_key("Author").unwrap().as_str(), "authorId");
    }

    #[test]
    fn test_外部名の重複でbuildが失敗する() {
        let result = FieldMapping::builder()
            .field("Title")
            .field_as("Title", "name")
            .build();

        assert_eq!(
            result.unwrap_err(),
            ProjectionError::DuplicateField {
                name: "Title".to_string(),
            }
        );
    }

    #[test]
    fn test_マッピングにない外部名はnoneを返す() {
        let mapping = article_mapping();

        assert!(mapping.internal_key("Extra").is_none());
    }

    // --- project ---

    #[test]
    fn test_マッピング通りにrenameして射影する() {
        // マッピング外の Extra は落ちる
        let pages = vec![page_from_json(json!({
            "id": "r1",
            "properties": {
                "Title": {
                    "type": "title",
                    "title": [{ "text": { "content": "Hello" } }],
                },
                "Author": {
                    "type": "relation",
                    "relation": [{ "id": "u1" }],
                },
                "Extra": { "type": "email", "email": "x@y.com" },
            },
        }))];

        let entities = project(&article_mapping(), &pages);

        assert_eq!(
            serde_json::to_value(&entities).unwrap(),
            json!([{ "id": "r1", "title": "Hello", "authorId": "u1" }])
        );
    }

    #[test]
    fn test_propertiesを持たない行は出力から除外される() {
        let pages = vec![
            page_from_json(json!({ "id": "r1" })),
            page_from_json(json!({
                "id": "r2",
                "properties": {
                    "Title": {
                        "type": "title",
                        "title": [{ "text": { "content": "A" } }],
                    },
                },
            })),
        ];

        let entities = project(&article_mapping(), &pages);

        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].id, "r2");
    }

    #[test]
    fn test_一致フィールドがなくてもidだけのレコードを出力する() {
        let pages = vec![page_from_json(json!({
            "id": "r1",
            "properties": {
                "Unmapped": { "type": "email", "email": "x@y.com" },
            },
        }))];

        let entities = project(&article_mapping(), &pages);

        assert_eq!(
            serde_json::to_value(&entities).unwrap(),
            json!([{ "id": "r1" }])
        );
    }

    #[test]
    fn test_空のtitleはnullとして出力に残る() {
        // 欠損はフィールドごと省略せず null で出力する
        let pages = vec![page_from_json(json!({
            "id": "r1",
            "properties": {
                "Title": { "type": "title", "title": [] },
            },
        }))];

        let entities = project(&article_mapping(), &pages);

        assert_eq!(
            serde_json::to_value(&entities).unwrap(),
            json!([{ "id": "r1", "title": null }])
        );
    }

    #[test]
    fn test_行の順序が保持される() {
        let pages: Vec<Page> = ["r1", "r2", "r3"]
            .iter()
            .map(|id| {
                page_from_json(json!({
                    "id": id,
                    "properties": {},
                }))
            })
            .collect();

        let entities = project(&article_mapping(), &pages);

        let ids: Vec<&str> = entities.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["r1", "r2", "r3"]);
    }

    #[test]
    fn test_出力件数は入力行数を超えない() {
        let pages = vec![
            page_from_json(json!({ "id": "r1" })),
            page_from_json(json!({ "id": "r2", "properties": {} })),
        ];

        let entities = project(&article_mapping(), &pages);

        assert!(entities.len() <= pages.len());
    }

    #[test]
    fn test_同じ入力から同じ出力が得られる() {
        // 冪等性: 隠れた状態を持たない
        let pages = vec![page_from_json(json!({
            "id": "r1",
            "properties": {
                "Title": {
                    "type": "title",
                    "title": [{ "text": { "content": "Hello" } }],
                },
            },
        }))];
        let mapping = article_mapping();

        let first = project(&mapping, &pages);
        let second = project(&mapping, &pages);

        assert_eq!(first, second);
    }

    #[test]
    fn test_id以外のキーはすべてマッピングの内部キーに属する() {
        let mapping = FieldMapping::builder()
            .field("Name")
            .field("Role")
            .build()
            .unwrap();
        let pages = vec![page_from_json(json!({
            "id": "u1",
            "properties": {
                "Name": {
                    "type": "rich_text",
                    "rich_text": [{ "text": { "content": "山田" } }],
                },
                "Secret": { "type": "email", "email": "hidden@y.com" },
                "Role": {
                    "type": "select",
                    "select": { "id": "1", "name": "admin", "color": "red" },
                },
            },
        }))];

        let entities = project(&mapping, &pages);

        let allowed = ["name", "role"];
        for entity in &entities {
            for key in entity.fields.keys() {
                assert!(allowed.contains(&key.as_str()), "unexpected key: {key}");
            }
        }
    }

    #[test]
    fn test_フィールドは行内の出現順で出力される() {
        let mapping = FieldMapping::builder()
            .field("Name")
            .field("Email")
            .build()
            .unwrap();
        let pages = vec![page_from_json(json!({
            "id": "u1",
            "properties": {
                "Email": { "type": "email", "email": "x@y.com" },
                "Name": {
                    "type": "rich_text",
                    "rich_text": [{ "text": { "content": "山田" } }],
                },
            },
        }))];

        let entities = project(&mapping, &pages);

        let keys: Vec<&String> = entities[0].fields.keys().collect();
        // マッピングの定義順ではなく、行のフィールド出現順
        assert_eq!(keys, ["email", "name"]);
    }

    #[test]
    fn test_entityのシリアライズでidが先頭フィールドになる() {
        let entity = Entity {
            id:     "r1".to_string(),
            fields: IndexMap::from([("title".to_string(), json!("Hello"))]),
        };

        let serialized = serde_json::to_string(&entity).unwrap();
        assert_eq!(serialized, r#"{"id":"r1","title":"Hello"}"#);
    }
}
