//! HTTP client for the PrestaShop webservice.
//!
//! This module provides the [`WebserviceClient`] type, the [`Transport`]
//! implementation that talks to a shop over HTTP.

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
use crate::clients::http_request::{DataType, HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::options::{keys, RequestOptions};
use crate::clients::Transport;
use crate::config::{ShopUrl, WebserviceConfig, WebserviceKey, WebserviceVersion};
use crate::xml::XmlNode;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Options that shape the URL path or body and are never sent as query parameters.
const NON_QUERY_OPTIONS: &[&str] = &[
    keys::RESOURCE,
    keys::ID,
    keys::URL,
    keys::POST_XML,
    keys::PUT_XML,
];

/// HTTP client for the PrestaShop webservice.
///
/// The client handles:
/// - URL construction from [`RequestOptions`]
/// - Basic authentication with the webservice key
/// - Default headers including User-Agent
/// - Status checking and the `PSWS-Version` compatibility check
///
/// Calls are sent one at a time and never retried.
///
/// # Example
///
/// ```rust,ignore
/// use prestashop_api::{ShopUrl, WebserviceConfig, WebserviceKey};
/// use prestashop_api::clients::{keys, RequestOptions, Transport, WebserviceClient};
///
/// let config = WebserviceConfig::builder()
///     .shop_url(ShopUrl::new("https://shop.example.com")?)
///     .api_key(WebserviceKey::new("ZQ88PRJX5VWQHCWE4EE7SQ7HPNX00RAJ")?)
///     .build()?;
/// let client = WebserviceClient::new(&config)?;
///
/// let options: RequestOptions = [(keys::RESOURCE, "products"), (keys::OUTPUT_FORMAT, "JSON")]
///     .into_iter()
///     .collect();
/// let products = client.get(&options).await?;
/// ```
#[derive(Debug)]
pub struct WebserviceClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Shop base URL.
    shop_url: ShopUrl,
    /// Webservice key, sent as the basic-auth user.
    api_key: WebserviceKey,
    /// Log response bodies at debug level.
    debug: bool,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify WebserviceClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WebserviceClient>();
};

impl WebserviceClient {
    /// Creates a new client for the configured shop.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &WebserviceConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent =
            format!("{user_agent_prefix}PrestaShop Webservice Rust Library v{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert(
            "Accept".to_string(),
            "application/json, text/xml".to_string(),
        );

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            shop_url: config.shop_url().clone(),
            api_key: config.api_key().clone(),
            debug: config.debug(),
            default_headers,
        })
    }

    /// Returns the shop base URL.
    #[must_use]
    pub const fn shop_url(&self) -> &ShopUrl {
        &self.shop_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Resolves the absolute URL for a call.
    ///
    /// - `url` is used verbatim when present.
    /// - Otherwise the URL is `<shop>/api/<resource>`, followed by `/<id>`
    ///   when an `id` option is set, and every remaining option except the
    ///   write payloads becomes a query parameter.
    ///
    /// Option values are expected to be query-ready: filter values arrive
    /// already percent-encoded (including `%` itself), so only `&` and `#`
    /// are percent-encoded here.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingResource`] when neither
    /// `url` nor `resource` is set.
    pub fn resolve_url(&self, options: &RequestOptions) -> Result<String, InvalidHttpRequestError> {
        if let Some(url) = options.url() {
            return Ok(url.to_string());
        }

        let resource = options
            .resource()
            .filter(|r| !r.is_empty())
            .ok_or(InvalidHttpRequestError::MissingResource)?;

        let mut url = format!("{}/{resource}", self.shop_url.api_url());
        if let Some(id) = options.get(keys::ID) {
            url.push('/');
            url.push_str(&urlencoding::encode(id));
        }

        let query: Vec<String> = options
            .iter()
            .filter(|(key, _)| !NON_QUERY_OPTIONS.contains(key))
            .map(|(key, value)| format!("{}={}", urlencoding::encode(key), encode_query_value(value)))
            .collect();
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.join("&"));
        }

        Ok(url)
    }

    /// Sends an HTTP request to the webservice.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs, including a body that cannot be read in full (`Network`)
    /// - The status is not 200 or 201 (`Response`)
    /// - The announced webservice version is unsupported (`IncompatibleVersion`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        tracing::debug!(method = %request.http_method, url = %request.url, "Sending webservice request");

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Put => self.client.put(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        };

        req_builder = req_builder.basic_auth(self.api_key.as_ref(), Some(""));
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(body_type) = &request.body_type {
            req_builder = req_builder.header("Content-Type", body_type.as_content_type());
        }
        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.clone());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;
        let response = HttpResponse::new(code, headers, body);

        if self.debug {
            tracing::debug!(code, body = %response.body, "Webservice response");
        }

        Self::check_version(&response)?;

        if !response.is_ok() {
            let error = HttpResponseError::from_status(code, response.provider_errors());
            tracing::warn!(code, url = %request.url, "{}", error.message);
            return Err(HttpError::Response(error));
        }

        Ok(response)
    }

    /// Rejects responses from webservice versions outside the supported range.
    fn check_version(response: &HttpResponse) -> Result<(), HttpError> {
        let Some(raw) = response.psws_version() else {
            tracing::debug!("Response carries no PSWS-Version header");
            return Ok(());
        };

        let compatible = raw
            .parse::<WebserviceVersion>()
            .is_ok_and(|version| version.is_compatible());
        if compatible {
            Ok(())
        } else {
            Err(HttpError::IncompatibleVersion {
                version: raw.to_string(),
            })
        }
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    async fn send_xml(
        &self,
        method: HttpMethod,
        options: &RequestOptions,
        payload_key: &str,
    ) -> Result<XmlNode, HttpError> {
        let url = self.resolve_url(options)?;
        let body = options.get(payload_key).ok_or_else(|| {
            InvalidHttpRequestError::MissingBody {
                method: method.to_string(),
            }
        })?;

        let request = HttpRequest::builder(method, url)
            .body(body)
            .body_type(DataType::Xml)
            .build()?;

        self.request(request).await?.xml()
    }
}

impl Transport for WebserviceClient {
    async fn get(&self, options: &RequestOptions) -> Result<Value, HttpError> {
        let url = self.resolve_url(options)?;
        let request = HttpRequest::builder(HttpMethod::Get, url).build()?;
        self.request(request).await?.json()
    }

    async fn add(&self, options: &RequestOptions) -> Result<XmlNode, HttpError> {
        self.send_xml(HttpMethod::Post, options, keys::POST_XML).await
    }

    async fn edit(&self, options: &RequestOptions) -> Result<XmlNode, HttpError> {
        self.send_xml(HttpMethod::Put, options, keys::PUT_XML).await
    }

    async fn delete(&self, options: &RequestOptions) -> Result<(), HttpError> {
        let url = self.resolve_url(options)?;
        let request = HttpRequest::builder(HttpMethod::Delete, url).build()?;
        self.request(request).await?;
        Ok(())
    }
}

/// Percent-encodes the characters that would break a query string.
fn encode_query_value(value: &str) -> String {
    value.replace('&', "%26").replace('#', "%23")
}
