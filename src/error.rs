//! Error types for the PrestaShop webservice SDK.
//!
//! This module contains the configuration error type. Transport errors live in
//! [`crate::clients`], XML errors in [`crate::xml`] and builder errors in
//! [`crate::resources`].
//!
//! # Example
//!
//! ```rust
//! use prestashop_api::{ConfigError, WebserviceKey};
//!
//! let result = WebserviceKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyWebserviceKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Every configuration constructor returns `Result<T, ConfigError>` so that
/// invalid values are rejected before any request is made.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Webservice key cannot be empty.
    #[error("Webservice key cannot be empty. Generate one under Advanced Parameters > Webservice in the PrestaShop back office.")]
    EmptyWebserviceKey,

    /// Shop URL is invalid.
    #[error("Invalid shop URL '{url}'. Please provide a URL with scheme (e.g., 'https://shop.example.com').")]
    InvalidShopUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Webservice version string is invalid.
    #[error("Invalid webservice version '{version}'. Expected dotted numbers (e.g., '1.7.8.0').")]
    InvalidVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
