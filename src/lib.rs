//! # PrestaShop Webservice Rust SDK
//!
//! A Rust SDK for the PrestaShop webservice, providing type-safe
//! configuration, an async HTTP transport, and resource builders that
//! translate list, find and write calls into webservice requests.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`WebserviceConfig`] and [`WebserviceConfigBuilder`]
//! - Validated newtypes for the shop URL and webservice key
//! - An async HTTP transport, [`WebserviceClient`], behind the [`Transport`] trait
//! - Resource builders with filter, pagination and detail fetching via [`resources`]
//! - Typed models for common resources plus an untyped [`resources::models::Entity`]
//! - An XML codec for write payloads via [`xml`]
//!
//! ## Quick Start
//!
//! ```rust
//! use prestashop_api::{ShopUrl, WebserviceConfig, WebserviceKey};
//!
//! // Create configuration using the builder pattern
//! let config = WebserviceConfig::builder()
//!     .shop_url(ShopUrl::new("https://shop.example.com").unwrap())
//!     .api_key(WebserviceKey::new("ZQ88PRJX5VWQHCWE4EE7SQ7HPNX00RAJ").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.shop_url().api_url(), "https://shop.example.com/api");
//! ```
//!
//! ## Listing and Fetching Resources
//!
//! ```rust,ignore
//! use prestashop_api::{WebserviceClient, WebserviceConfig};
//! use prestashop_api::resources::{Builder, Limit, ListQuery};
//! use prestashop_api::resources::models::Product;
//!
//! let client = WebserviceClient::new(&config)?;
//! let products = Builder::<Product, _>::new(&client);
//!
//! // Identifier-only handles
//! let handles = products
//!     .get(&ListQuery::new().filter("active", "1").limit(Limit::Range { offset: 0, count: 50 }))
//!     .await?;
//!
//! // Full models, fetched one after another
//! let full = products
//!     .get(&ListQuery::new().filter("name", ("like", "mug")).details(true))
//!     .await?;
//!
//! let product = products.find(1).await?;
//! ```
//!
//! ## Creating Resources
//!
//! ```rust,ignore
//! use prestashop_api::resources::Builder;
//! use prestashop_api::resources::models::Customer;
//!
//! let customers = Builder::<Customer, _>::new(&client);
//! let created = customers
//!     .create(&Customer {
//!         firstname: Some("Jane".into()),
//!         lastname: Some("Doe".into()),
//!         email: Some("jane@example.com".into()),
//!         passwd: Some("secret123".into()),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("Created customer {:?}", created.id);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes validate on construction
//! - **Sequential calls**: Every call awaits its round trip; detail fetches never overlap
//! - **Pluggable transport**: Builders only depend on the [`Transport`] trait
//! - **Thread-safe**: All types are `Send + Sync`

pub mod clients;
pub mod config;
pub mod error;
pub mod resources;
pub mod xml;

// Re-export public types at crate root for convenience
pub use config::{
    ShopUrl, WebserviceConfig, WebserviceConfigBuilder, WebserviceKey, WebserviceVersion,
};
pub use error::ConfigError;

// Re-export transport types
pub use clients::{
    DataType, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, RequestOptions, Transport, WebserviceClient,
};

// Re-export builder types
pub use resources::{Builder, Limit, ListQuery, Resource, ResourceError};
