//! Transport error types for the PrestaShop webservice SDK.
//!
//! - [`HttpResponseError`]: the webservice answered with a failure status
//! - [`InvalidHttpRequestError`]: a request failed validation before sending
//! - [`HttpError`]: unified error type for everything a transport call can
//!   report
//!
//! # Example
//!
//! ```rust,ignore
//! use prestashop_api::clients::{HttpError, Transport};
//!
//! match client.get(&options).await {
//!     Ok(body) => println!("{body}"),
//!     Err(HttpError::Response(e)) => println!("status {}: {}", e.code, e.message),
//!     Err(HttpError::IncompatibleVersion { version }) => println!("unsupported {version}"),
//!     Err(e) => println!("transport error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::config::WebserviceVersion;
use crate::xml::XmlError;

/// Returns the human readable meaning of a webservice status code.
///
/// # Example
///
/// ```rust
/// use prestashop_api::clients::status_label;
///
/// assert_eq!(status_label(401), "Unauthorized");
/// assert_eq!(status_label(418), "Unknown");
/// ```
#[must_use]
pub const fn status_label(code: u16) -> &'static str {
    match code {
        204 => "No content",
        400 => "Bad Request",
        401 => "Unauthorized",
        404 => "Not Found",
        405 => "Method Not Allowed",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

/// Error returned when the webservice answers with a failure status.
///
/// The message follows the wording of the PrestaShop webservice library and
/// appends any error messages the webservice put in the response body.
///
/// # Example
///
/// ```rust
/// use prestashop_api::clients::HttpResponseError;
///
/// let error = HttpResponseError::from_status(404, vec![]);
/// assert_eq!(
///     error.to_string(),
///     "This call to PrestaShop Web Services failed and returned an HTTP status of 404. That means: Not Found."
/// );
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Formatted error message.
    pub message: String,
    /// Error messages reported by the webservice in the response body.
    pub errors: Vec<String>,
}

impl HttpResponseError {
    /// Builds the error for a status code and the provider's error messages.
    #[must_use]
    pub fn from_status(code: u16, errors: Vec<String>) -> Self {
        let mut message = format!(
            "This call to PrestaShop Web Services failed and returned an HTTP status of {code}. That means: {}.",
            status_label(code)
        );
        if !errors.is_empty() {
            message.push_str(" Details: ");
            message.push_str(&errors.join("; "));
        }
        Self {
            code,
            message,
            errors,
        }
    }
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// Neither `resource` nor `url` was given.
    #[error("Bad parameters given: either 'resource' or 'url' is required.")]
    MissingResource,

    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for transport calls.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The webservice answered with a failure status.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The `PSWS-Version` header announced a version outside the supported range.
    #[error(
        "This library is not compatible with webservice version {version} (supported: {}..={}).",
        WebserviceVersion::MIN_COMPATIBLE,
        WebserviceVersion::MAX_COMPATIBLE
    )]
    IncompatibleVersion {
        /// The version announced by the webservice.
        version: String,
    },

    /// The response body could not be decoded.
    #[error("Failed to decode response body: {message}")]
    Decode {
        /// Description of the decoding failure.
        message: String,
    },

    /// The response body was not valid XML.
    #[error(transparent)]
    Xml(#[from] XmlError),
}

impl HttpError {
    /// Returns the HTTP status code when the webservice answered with a failure.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}
