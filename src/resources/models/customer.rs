//! Customer resource.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::common::{optional_datetime, optional_flag, optional_id, optional_text};
use crate::resources::Resource;

/// A shop customer account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Customer {
    /// Resource identifier, assigned by the shop.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_id")]
    pub id: Option<u64>,
    /// Default customer group identifier.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_id")]
    pub id_default_group: Option<u64>,
    /// Language identifier.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_id")]
    pub id_lang: Option<u64>,
    /// Social title identifier.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_id")]
    pub id_gender: Option<u64>,
    /// First name.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub firstname: Option<String>,
    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub lastname: Option<String>,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub email: Option<String>,
    /// Password, only sent when creating a customer.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub passwd: Option<String>,
    /// Birth date, `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub birthday: Option<String>,
    /// Company name.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub company: Option<String>,
    /// Private note visible to merchants only.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub note: Option<String>,
    /// Whether the customer subscribed to the newsletter.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_flag")]
    pub newsletter: Option<bool>,
    /// Whether the customer accepted partner offers.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_flag")]
    pub optin: Option<bool>,
    /// Whether the resource is enabled.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_flag")]
    pub active: Option<bool>,
    /// Whether this is a guest account.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "optional_flag")]
    pub is_guest: Option<bool>,
    /// Creation date. Read-only.
    #[serde(skip_serializing, deserialize_with = "optional_datetime")]
    pub date_add: Option<NaiveDateTime>,
    /// Last modification date. Read-only.
    #[serde(skip_serializing, deserialize_with = "optional_datetime")]
    pub date_upd: Option<NaiveDateTime>,
}

impl Resource for Customer {
    const ENTITY: &'static str = "customers";
    const NODE: &'static str = "customer";
}
