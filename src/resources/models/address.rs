//! Address resource.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::common::{optional_datetime, optional_flag, optional_id, optional_text};
use crate::resources::Resource;

/// A postal address of a customer, manufacturer or supplier.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Address {
    /// Resource identifier, assigned by the shop.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_id")]
    pub id: Option<u64>,
    /// Owning customer identifier.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_id")]
    pub id_customer: Option<u64>,
    /// Owning manufacturer identifier.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_id")]
    pub id_manufacturer: Option<u64>,
    /// Country identifier.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_id")]
    pub id_country: Option<u64>,
    /// State identifier.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_id")]
    pub id_state: Option<u64>,
    /// Label the owner gives the address.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub alias: Option<String>,
    /// Company name.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub company: Option<String>,
    /// First name.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub firstname: Option<String>,
    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub lastname: Option<String>,
    /// First address line.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub address1: Option<String>,
    /// Second address line.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub address2: Option<String>,
    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub postcode: Option<String>,
    /// City.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub city: Option<String>,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub phone: Option<String>,
    /// Mobile phone number.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub phone_mobile: Option<String>,
    /// VAT number.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub vat_number: Option<String>,
    /// Identification number, required in some countries.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub dni: Option<String>,
    /// Whether the address was deleted. Read-only.
    #[serde(skip_serializing, deserialize_with = "optional_flag")]
    pub deleted: Option<bool>,
    /// Creation date. Read-only.
    #[serde(skip_serializing, deserialize_with = "optional_datetime")]
    pub date_add: Option<NaiveDateTime>,
    /// Last modification date. Read-only.
    #[serde(skip_serializing, deserialize_with = "optional_datetime")]
    pub date_upd: Option<NaiveDateTime>,
}

impl Resource for Address {
    const ENTITY: &'static str = "addresses";
    const NODE: &'static str = "address";
}
