//! Error type for resource builder operations.
//!
//! Builder calls report a single error type, [`ResourceError`]. Transport
//! failures are wrapped once into [`ResourceError::Http`], except a 404 on a
//! call that names an identifier, which becomes [`ResourceError::NotFound`].
//!
//! # Example
//!
//! ```rust,ignore
//! use prestashop_api::resources::{Builder, ResourceError};
//! use prestashop_api::resources::models::Product;
//!
//! let products = Builder::<Product, _>::new(&client);
//! match products.find(42).await {
//!     Ok(product) => println!("Found: {:?}", product.name),
//!     Err(ResourceError::NotFound { resource, id }) => {
//!         println!("{resource} with id {id} not found");
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::HttpError;
use crate::xml::XmlError;

/// Error type for resource builder operations.
///
/// # Example
///
/// ```rust
/// use prestashop_api::resources::ResourceError;
///
/// let error = ResourceError::NotFound {
///     resource: "products".to_string(),
///     id: "123".to_string(),
/// };
/// assert_eq!(error.to_string(), "products with id 123 not found");
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource does not exist, or the webservice returned nothing for it.
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The entity name (e.g., "products").
        resource: String,
        /// The identifier that was requested.
        id: String,
    },

    /// A write call succeeded but the response carried no resource.
    #[error("The webservice returned no {resource} after {operation}")]
    EmptyResponse {
        /// The entity name.
        resource: String,
        /// The operation that was attempted (e.g., "create").
        operation: &'static str,
    },

    /// A filter could not be encoded.
    #[error("Invalid filter: {reason}")]
    InvalidFilter {
        /// What is wrong with the filter.
        reason: String,
    },

    /// A model could not be built from, or turned into, webservice data.
    #[error("Failed to map model: {0}")]
    Model(#[from] serde_json::Error),

    /// The XML payload could not be written or read.
    #[error(transparent)]
    Xml(#[from] XmlError),

    /// A transport-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Wraps a transport error for a call on a known identifier.
    ///
    /// A 404 becomes [`ResourceError::NotFound`]; anything else is kept as
    /// [`ResourceError::Http`].
    #[must_use]
    pub fn from_http(error: HttpError, resource: &str, id: &str) -> Self {
        match error.status() {
            Some(404) => Self::NotFound {
                resource: resource.to_string(),
                id: id.to_string(),
            },
            _ => Self::Http(error),
        }
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
