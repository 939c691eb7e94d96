//! Configuration types for the PrestaShop webservice SDK.
//!
//! # Overview
//!
//! - [`WebserviceConfig`]: shop URL, webservice key and client settings
//! - [`WebserviceConfigBuilder`]: builder for [`WebserviceConfig`]
//! - [`WebserviceKey`]: validated webservice key with masked debug output
//! - [`ShopUrl`]: validated shop base URL
//! - [`WebserviceVersion`]: version announced by the `PSWS-Version` header
//!
//! # Example
//!
//! ```rust
//! use prestashop_api::{WebserviceConfig, ShopUrl, WebserviceKey};
//!
//! let config = WebserviceConfig::builder()
//!     .shop_url(ShopUrl::new("https://shop.example.com").unwrap())
//!     .api_key(WebserviceKey::new("ZQ88PRJX5VWQHCWE4EE7SQ7HPNX00RAJ").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert!(!config.debug());
//! ```

mod newtypes;
mod version;

pub use newtypes::{ShopUrl, WebserviceKey};
pub use version::WebserviceVersion;

use crate::error::ConfigError;

/// Configuration for the PrestaShop webservice SDK.
///
/// `WebserviceConfig` is `Clone`, `Send`, and `Sync`, so one configuration
/// can back any number of clients.
#[derive(Clone, Debug)]
pub struct WebserviceConfig {
    shop_url: ShopUrl,
    api_key: WebserviceKey,
    debug: bool,
    user_agent_prefix: Option<String>,
}

impl WebserviceConfig {
    /// Creates a new builder for constructing a `WebserviceConfig`.
    #[must_use]
    pub fn builder() -> WebserviceConfigBuilder {
        WebserviceConfigBuilder::new()
    }

    /// Returns the shop base URL.
    #[must_use]
    pub const fn shop_url(&self) -> &ShopUrl {
        &self.shop_url
    }

    /// Returns the webservice key.
    #[must_use]
    pub const fn api_key(&self) -> &WebserviceKey {
        &self.api_key
    }

    /// Returns whether response bodies are logged at debug level.
    #[must_use]
    pub const fn debug(&self) -> bool {
        self.debug
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify WebserviceConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WebserviceConfig>();
};

/// Builder for constructing [`WebserviceConfig`] instances.
///
/// `shop_url` and `api_key` are required.
///
/// # Defaults
///
/// - `debug`: `false`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct WebserviceConfigBuilder {
    shop_url: Option<ShopUrl>,
    api_key: Option<WebserviceKey>,
    debug: Option<bool>,
    user_agent_prefix: Option<String>,
}

impl WebserviceConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shop base URL (required).
    #[must_use]
    pub fn shop_url(mut self, url: ShopUrl) -> Self {
        self.shop_url = Some(url);
        self
    }

    /// Sets the webservice key (required).
    #[must_use]
    pub fn api_key(mut self, key: WebserviceKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Enables logging of response bodies at debug level.
    #[must_use]
    pub const fn debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`WebserviceConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `shop_url` or
    /// `api_key` are not set.
    pub fn build(self) -> Result<WebserviceConfig, ConfigError> {
        let shop_url = self
            .shop_url
            .ok_or(ConfigError::MissingRequiredField { field: "shop_url" })?;
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(WebserviceConfig {
            shop_url,
            api_key,
            debug: self.debug.unwrap_or(false),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
