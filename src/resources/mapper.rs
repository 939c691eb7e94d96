//! Turns decoded webservice responses into models.
//!
//! JSON reads come back wrapped in the entity name, e.g.
//! `{"products": [{"id": 1}, {"id": 2}]}` for a listing and
//! `{"product": {...}}` for a single resource. Writes answer with
//! `<prestashop><product>...</product></prestashop>`.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::resources::ResourceError;
use crate::xml::{xml_to_value, XmlNode};

/// Returns the entries of a decoded collection in document order.
///
/// Objects yield their values, arrays their items; anything else is empty.
fn entries(value: &Value) -> Vec<&Value> {
    match value {
        Value::Object(map) => map.values().collect(),
        Value::Array(items) => items.iter().collect(),
        _ => Vec::new(),
    }
}

/// Returns the first entry of a decoded collection, unless it is `null`.
#[must_use]
pub fn first_entry(response: &Value) -> Option<&Value> {
    entries(response)
        .into_iter()
        .next()
        .filter(|entry| !entry.is_null())
}

/// Collects the identifiers of a listing response.
///
/// Walks the first nested collection of the response and reads the primary
/// key of every entry. Entries without the key, or with a `null` one, are
/// skipped.
#[must_use]
pub fn collect_identifiers(response: &Value, primary_key: &str) -> Vec<Value> {
    let Some(first) = entries(response).into_iter().next() else {
        return Vec::new();
    };

    entries(first)
        .into_iter()
        .filter_map(|entry| entry.get(primary_key))
        .filter(|id| !id.is_null())
        .cloned()
        .collect()
}

/// Renders an identifier the way it appears in a URL.
#[must_use]
pub fn identifier_to_string(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Builds a model that carries only its identifier.
///
/// # Errors
///
/// Returns [`ResourceError::Model`] if the model cannot be built from
/// `{<primary_key>: id}`.
pub fn identifier_handle<M: DeserializeOwned>(
    primary_key: &str,
    id: &Value,
) -> Result<M, ResourceError> {
    let mut fields = Map::new();
    fields.insert(primary_key.to_string(), id.clone());
    Ok(serde_json::from_value(Value::Object(fields))?)
}

/// Maps a single-resource response to a model.
///
/// # Errors
///
/// Returns [`ResourceError::NotFound`] if the response holds no resource,
/// and [`ResourceError::Model`] if the model cannot be built from it.
pub fn map_find<M: DeserializeOwned>(
    response: &Value,
    resource: &str,
    id: &str,
) -> Result<M, ResourceError> {
    let fields = first_entry(response).ok_or_else(|| ResourceError::NotFound {
        resource: resource.to_string(),
        id: id.to_string(),
    })?;

    Ok(serde_json::from_value(fields.clone())?)
}

/// Maps the XML answer of a create or update call to a model.
///
/// The resource is the first child of the document root.
///
/// # Errors
///
/// Returns [`ResourceError::EmptyResponse`] if the root has no child, and
/// [`ResourceError::Model`] if the model cannot be built from it.
pub fn map_create<M: DeserializeOwned>(
    root: &XmlNode,
    resource: &str,
    operation: &'static str,
) -> Result<M, ResourceError> {
    let node = root
        .first_child()
        .ok_or_else(|| ResourceError::EmptyResponse {
            resource: resource.to_string(),
            operation,
        })?;

    Ok(serde_json::from_value(xml_to_value(node))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Item {
        id: Option<u64>,
        name: Option<String>,
    }

    #[test]
    fn test_collect_identifiers_skips_missing_and_null() {
        let response = json!({"products": [{"id": 1}, {"name": "x"}, {"id": null}, {"id": 4}]});
        assert_eq!(
            collect_identifiers(&response, "id"),
            vec![json!(1), json!(4)]
        );
    }

    #[test]
    fn test_collect_identifiers_reads_only_first_collection() {
        let response = json!({"products": [{"id": 1}], "other": [{"id": 2}]});
        assert_eq!(collect_identifiers(&response, "id"), vec![json!(1)]);
    }

    #[test]
    fn test_collect_identifiers_of_empty_response() {
        assert!(collect_identifiers(&json!([]), "id").is_empty());
        assert!(collect_identifiers(&json!({}), "id").is_empty());
        assert!(collect_identifiers(&Value::Null, "id").is_empty());
    }

    #[test]
    fn test_identifier_handle_carries_only_the_key() {
        let item: Item = identifier_handle("id", &json!(1)).unwrap();
        assert_eq!(
            item,
            Item {
                id: Some(1),
                name: None
            }
        );
    }

    #[test]
    fn test_first_entry_skips_null() {
        assert_eq!(first_entry(&json!({"product": {"id": 1}})), Some(&json!({"id": 1})));
        assert_eq!(first_entry(&json!({"product": null})), None);
        assert_eq!(first_entry(&json!([])), None);
    }

    #[test]
    fn test_map_find_takes_first_element() {
        let response = json!({"product": {"id": 3, "name": "Mug"}});
        let item: Item = map_find(&response, "products", "3").unwrap();
        assert_eq!(item.name.as_deref(), Some("Mug"));
    }

    #[test]
    fn test_map_find_of_empty_response_is_not_found() {
        let result: Result<Item, _> = map_find(&json!([]), "products", "3");
        assert!(matches!(
            result,
            Err(ResourceError::NotFound { id, .. }) if id == "3"
        ));
    }

    #[test]
    fn test_map_create_reads_first_child_of_root() {
        let root = XmlNode::parse(
            "<prestashop><product><id>12</id><name>Mug</name></product></prestashop>",
        )
        .unwrap();

        #[derive(Deserialize)]
        struct Written {
            id: String,
            name: String,
        }
        let written: Written = map_create(&root, "products", "create").unwrap();
        assert_eq!(written.id, "12");
        assert_eq!(written.name, "Mug");
    }

    #[test]
    fn test_map_create_without_child_is_empty_response() {
        let root = XmlNode::parse("<prestashop></prestashop>").unwrap();
        let result: Result<Item, _> = map_create(&root, "products", "create");
        assert!(matches!(
            result,
            Err(ResourceError::EmptyResponse { operation: "create", .. })
        ));
    }

    #[test]
    fn test_identifier_to_string() {
        assert_eq!(identifier_to_string(&json!(7)), "7");
        assert_eq!(identifier_to_string(&json!("7")), "7");
    }
}
