//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated PrestaShop webservice key.
///
/// The key is sent as the basic-auth user name on every request. It is
/// masked in debug output so it does not leak into logs.
///
/// # Example
///
/// ```rust
/// use prestashop_api::WebserviceKey;
///
/// let key = WebserviceKey::new("ZQ88PRJX5VWQHCWE4EE7SQ7HPNX00RAJ").unwrap();
/// assert_eq!(key.as_ref(), "ZQ88PRJX5VWQHCWE4EE7SQ7HPNX00RAJ");
/// assert_eq!(format!("{:?}", key), "WebserviceKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct WebserviceKey(String);

impl WebserviceKey {
    /// Creates a new validated webservice key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyWebserviceKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into().trim().to_string();
        if key.is_empty() {
            return Err(ConfigError::EmptyWebserviceKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for WebserviceKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for WebserviceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WebserviceKey(*****)")
    }
}

/// A validated shop base URL.
///
/// The URL must carry an `http` or `https` scheme and a host. Trailing
/// slashes are removed so that `/api/...` paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use prestashop_api::ShopUrl;
///
/// let url = ShopUrl::new("https://shop.example.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://shop.example.com");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "shop.example.com");
/// assert_eq!(url.api_url(), "https://shop.example.com/api");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl ShopUrl {
    /// Creates a new validated shop URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShopUrl`] if the URL has no supported
    /// scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidShopUrl { url: url.clone() })?;

        let scheme = url[..scheme_end].to_ascii_lowercase();
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::InvalidShopUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidShopUrl { url: url.clone() });
        }

        // Query strings and fragments cannot prefix `/api/...` paths.
        if remainder.contains(['?', '#']) {
            return Err(ConfigError::InvalidShopUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Returns the webservice entry point (`<shop>/api`).
    #[must_use]
    pub fn api_url(&self) -> String {
        format!("{}/api", self.url)
    }
}

impl AsRef<str> for ShopUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for ShopUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl Serialize for ShopUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for ShopUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
