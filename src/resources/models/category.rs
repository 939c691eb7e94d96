//! Category resource.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{optional_datetime, optional_flag, optional_id, optional_text, Translatable};
use crate::resources::Resource;

/// A catalog category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Category {
    /// Resource identifier, assigned by the shop.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_id")]
    pub id: Option<u64>,
    /// Parent category identifier.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_id")]
    pub id_parent: Option<u64>,
    /// Depth in the category tree. Read-only.
    #[serde(skip_serializing, deserialize_with = "optional_text")]
    pub level_depth: Option<String>,
    /// Whether the resource is enabled.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_flag")]
    pub active: Option<bool>,
    /// Whether this is a shop root category.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_flag")]
    pub is_root_category: Option<bool>,
    /// Position among its siblings.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub position: Option<String>,
    /// Name, per language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Translatable>,
    /// URL slug, per language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_rewrite: Option<Translatable>,
    /// Description, per language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Translatable>,
    /// Creation date. Read-only.
    #[serde(skip_serializing, deserialize_with = "optional_datetime")]
    pub date_add: Option<NaiveDateTime>,
    /// Last modification date. Read-only.
    #[serde(skip_serializing, deserialize_with = "optional_datetime")]
    pub date_upd: Option<NaiveDateTime>,
    /// Linked resources, sent back as given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associations: Option<Value>,
}

impl Resource for Category {
    const ENTITY: &'static str = "categories";
    const NODE: &'static str = "category";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_from_json_response() {
        let category: Category = serde_json::from_value(json!({
            "id": 3,
            "id_parent": "2",
            "level_depth": "2",
            "active": "1",
            "is_root_category": "0",
            "position": "0",
            "name": [{"id": "1", "value": "Clothes"}, {"id": "2", "value": "Vêtements"}],
            "link_rewrite": [{"id": "1", "value": "clothes"}, {"id": "2", "value": "vetements"}]
        }))
        .unwrap();

        assert_eq!(category.id_parent, Some(2));
        assert_eq!(category.is_root_category, Some(false));
        assert_eq!(
            category.name.as_ref().and_then(|n| n.get(2)),
            Some("Vêtements")
        );
    }

    #[test]
    fn test_category_serialization_skips_level_depth() {
        let category = Category {
            id_parent: Some(2),
            level_depth: Some("2".to_string()),
            name: Some(Translatable::single(1, "Mugs")),
            ..Default::default()
        };

        let value = serde_json::to_value(&category).unwrap();
        assert!(value.get("level_depth").is_none());
        assert_eq!(value.get("id_parent"), Some(&json!(2)));
    }

    #[test]
    fn test_category_resource_names() {
        assert_eq!(Category::ENTITY, "categories");
        assert_eq!(Category::NODE, "category");
    }
}
