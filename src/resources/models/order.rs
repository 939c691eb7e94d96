//! Order resource.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{optional_datetime, optional_flag, optional_id, optional_text};
use crate::resources::Resource;

/// A customer order.
///
/// Amounts are kept as the decimal strings the webservice returns.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Order {
    /// Resource identifier, assigned by the shop.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_id")]
    pub id: Option<u64>,
    /// Delivery address identifier.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_id")]
    pub id_address_delivery: Option<u64>,
    /// Invoice address identifier.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_id")]
    pub id_address_invoice: Option<u64>,
    /// Cart identifier.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_id")]
    pub id_cart: Option<u64>,
    /// Currency identifier.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_id")]
    pub id_currency: Option<u64>,
    /// Language identifier.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_id")]
    pub id_lang: Option<u64>,
    /// Customer identifier.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_id")]
    pub id_customer: Option<u64>,
    /// Carrier identifier.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_id")]
    pub id_carrier: Option<u64>,
    /// Current order state identifier.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_id")]
    pub current_state: Option<u64>,
    /// Technical name of the payment module.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub module: Option<String>,
    /// Payment method label.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub payment: Option<String>,
    /// Order reference. Read-only.
    #[serde(skip_serializing, deserialize_with = "optional_text")]
    pub reference: Option<String>,
    /// Currency conversion rate at order time.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub conversion_rate: Option<String>,
    /// Total paid, tax included.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub total_paid: Option<String>,
    /// Amount actually received.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub total_paid_real: Option<String>,
    /// Products total, tax excluded.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub total_products: Option<String>,
    /// Products total, tax included.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub total_products_wt: Option<String>,
    /// Shipping total.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub total_shipping: Option<String>,
    /// Whether the order reached a validated state. Read-only.
    #[serde(skip_serializing, deserialize_with = "optional_flag")]
    pub valid: Option<bool>,
    /// Creation date. Read-only.
    #[serde(skip_serializing, deserialize_with = "optional_datetime")]
    pub date_add: Option<NaiveDateTime>,
    /// Last modification date. Read-only.
    #[serde(skip_serializing, deserialize_with = "optional_datetime")]
    pub date_upd: Option<NaiveDateTime>,
    /// Order rows and other linked resources, sent back as given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associations: Option<Value>,
}

impl Resource for Order {
    const ENTITY: &'static str = "orders";
    const NODE: &'static str = "order";
}
