//! Product resource.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{optional_datetime, optional_flag, optional_id, optional_text, Translatable};
use crate::resources::Resource;

/// A catalog product.
///
/// Prices and weights are kept as the decimal strings the webservice
/// returns. Multilingual fields are [`Translatable`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Product {
    /// Resource identifier, assigned by the shop.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_id")]
    pub id: Option<u64>,
    /// Manufacturer identifier.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_id")]
    pub id_manufacturer: Option<u64>,
    /// Default supplier identifier.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_id")]
    pub id_supplier: Option<u64>,
    /// Default category identifier.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_id")]
    pub id_category_default: Option<u64>,
    /// Tax rules group identifier.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_id")]
    pub id_tax_rules_group: Option<u64>,
    /// Cover image identifier. Read-only.
    #[serde(skip_serializing, deserialize_with = "optional_id")]
    pub id_default_image: Option<u64>,
    /// Merchant reference.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub reference: Option<String>,
    /// EAN-13 barcode.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub ean13: Option<String>,
    /// Price excluding tax, as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub price: Option<String>,
    /// Purchase price, as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub wholesale_price: Option<String>,
    /// Package weight, as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub weight: Option<String>,
    /// Whether the resource is enabled.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_flag")]
    pub active: Option<bool>,
    /// Whether the product can be ordered.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_flag")]
    pub available_for_order: Option<bool>,
    /// Whether the price is displayed.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_flag")]
    pub show_price: Option<bool>,
    /// Condition: `new`, `used` or `refurbished`.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub condition: Option<String>,
    /// Where the product is shown: `both`, `catalog`, `search` or `none`.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub visibility: Option<String>,
    /// Product state; `0` marks a temporary product.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub state: Option<String>,
    /// Name, per language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Translatable>,
    /// Description, per language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Translatable>,
    /// Short description, per language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_short: Option<Translatable>,
    /// URL slug, per language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_rewrite: Option<Translatable>,
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

impl Resource for Product {
    const ENTITY: &'static str = "products";
    const NODE: &'static str = "product";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::{value_to_xml, xml_to_value, XmlNode};
    use serde_json::json;

    #[test]
    fn test_product_from_json_response() {
        let product: Product = serde_json::from_value(json!({
            "id": 1,
            "id_manufacturer": "1",
            "id_supplier": "0",
            "id_category_default": "4",
            "id_default_image": "1",
            "reference": "demo_1",
            "price": "23.900000",
            "active": "1",
            "condition": "new",
            "name": [{"id": "1", "value": "Hummingbird printed t-shirt"}],
            "link_rewrite": [{"id": "1", "value": "hummingbird-printed-t-shirt"}],
            "date_add": "2024-01-15 09:30:00",
            "date_upd": "0000-00-00 00:00:00",
            "associations": {"categories": [{"id": "2"}, {"id": "4"}]}
        }))
        .unwrap();

        assert_eq!(product.id, Some(1));
        assert_eq!(product.id_supplier, Some(0));
        assert_eq!(product.id_default_image, Some(1));
        assert_eq!(product.price.as_deref(), Some("23.900000"));
        assert_eq!(product.active, Some(true));
        assert_eq!(
            product.name.as_ref().and_then(|n| n.get(1)),
            Some("Hummingbird printed t-shirt")
        );
        assert!(product.date_add.is_some());
        assert!(product.date_upd.is_none());
        assert!(product.associations.is_some());
    }

    #[test]
    fn test_product_from_xml_response() {
        let root = XmlNode::parse(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<prestashop xmlns:xlink="http://www.w3.org/1999/xlink">
<product>
    <id><![CDATA[21]]></id>
    <id_category_default xlink:href="https://shop.example.com/api/categories/2"><![CDATA[2]]></id_category_default>
    <price><![CDATA[9.990000]]></price>
    <active><![CDATA[0]]></active>
    <name><language id="1" xlink:href="https://shop.example.com/api/languages/1"><![CDATA[Mug]]></language></name>
</product>
</prestashop>"#,
        )
        .unwrap();

        let product: Product =
            serde_json::from_value(xml_to_value(root.first_child().unwrap())).unwrap();

        assert_eq!(product.id, Some(21));
        assert_eq!(product.id_category_default, Some(2));
        assert_eq!(product.active, Some(false));
        assert_eq!(product.name, Some(Translatable::single(1, "Mug")));
    }

    #[test]
    fn test_product_serialization_skips_read_only_fields() {
        let product = Product {
            price: Some("9.99".to_string()),
            active: Some(true),
            id_default_image: Some(3),
            name: Some(Translatable::single(1, "Mug")),
            ..Default::default()
        };

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(
            value,
            json!({
                "price": "9.99",
                "active": true,
                "name": {"language": [{"@id": "1", "#text": "Mug"}]}
            })
        );

        let xml = value_to_xml("product", &value).unwrap();
        assert!(xml.contains("<active>1</active>"));
        assert!(xml.contains(r#"<name><language id="1">Mug</language></name>"#));
    }

    #[test]
    fn test_product_resource_names() {
        assert_eq!(Product::ENTITY, "products");
        assert_eq!(Product::DETAILS_ENTITY, "products");
        assert_eq!(Product::NODE, "product");
        assert_eq!(Product::PRIMARY_KEY, "id");
    }
}
