//! Transport layer for the PrestaShop webservice.
//!
//! This module provides the HTTP plumbing the resource builders sit on. It
//! turns [`RequestOptions`] into authenticated requests, checks statuses and
//! the announced webservice version, and decodes response bodies.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Transport`]: The async seam builders call through
//! - [`WebserviceClient`]: The HTTP implementation of [`Transport`]
//! - [`RequestOptions`]: Resource, URL, query and payload of one call
//! - [`HttpRequest`]: A request to be sent to the webservice
//! - [`HttpResponse`]: A response from the webservice
//! - [`HttpError`]: Everything a transport call can fail with
//!
//! # Example
//!
//! ```rust,ignore
//! use prestashop_api::{ShopUrl, WebserviceConfig, WebserviceKey};
//! use prestashop_api::clients::{keys, RequestOptions, Transport, WebserviceClient};
//!
//! let config = WebserviceConfig::builder()
//!     .shop_url(ShopUrl::new("https://shop.example.com")?)
//!     .api_key(WebserviceKey::new("ZQ88PRJX5VWQHCWE4EE7SQ7HPNX00RAJ")?)
//!     .build()?;
//! let client = WebserviceClient::new(&config)?;
//!
//! let mut options = RequestOptions::new();
//! options.insert(keys::RESOURCE, "customers");
//! options.insert(keys::OUTPUT_FORMAT, "JSON");
//! let customers = client.get(&options).await?;
//! ```
//!
//! # Failure Behavior
//!
//! Calls are made once. Statuses other than 200 and 201 fail with
//! [`HttpError::Response`], whose message names the status and whatever
//! error messages the webservice returned.

mod errors;
mod http_request;
mod http_response;
mod options;
mod transport;
mod webservice_client;

pub use errors::{status_label, HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, PSWS_VERSION_HEADER};
pub use options::{filter_key, keys, RequestOptions, OUTPUT_FORMAT_JSON};
pub use transport::Transport;
pub use webservice_client::{WebserviceClient, SDK_VERSION};
