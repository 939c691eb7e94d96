//! The seam between resource builders and the wire.

use serde_json::Value;

use crate::clients::{HttpError, RequestOptions};
use crate::xml::XmlNode;

/// Executes webservice calls described by [`RequestOptions`].
///
/// [`WebserviceClient`](crate::clients::WebserviceClient) is the HTTP
/// implementation; tests plug in doubles that record the options they get.
///
/// Reads return the decoded JSON body. Writes return the root element of the
/// XML document the webservice answers with.
#[allow(async_fn_in_trait)]
pub trait Transport: Send + Sync {
    /// Fetches a resource listing, a single resource or a schema.
    async fn get(&self, options: &RequestOptions) -> Result<Value, HttpError>;

    /// Creates a resource from the `postXml` option.
    async fn add(&self, options: &RequestOptions) -> Result<XmlNode, HttpError>;

    /// Updates a resource from the `putXml` option.
    async fn edit(&self, options: &RequestOptions) -> Result<XmlNode, HttpError>;

    /// Deletes a resource.
    async fn delete(&self, options: &RequestOptions) -> Result<(), HttpError>;
}
