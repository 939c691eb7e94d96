//! HTTP response types for the PrestaShop webservice SDK.
//!
//! [`HttpResponse`] keeps the raw body text; the webservice answers in JSON
//! for reads that ask for `output_format=JSON` and in XML otherwise, so the
//! caller decides how to decode it.

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::errors::HttpError;
use crate::xml::XmlNode;

/// Header carrying the webservice version.
pub const PSWS_VERSION_HEADER: &str = "psws-version";

/// An HTTP response from the webservice.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`. Header names are lowercased.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<String>) -> Self {
        let headers = headers
            .into_iter()
            .map(|(name, values)| (name.to_lowercase(), values))
            .collect();
        Self {
            code,
            headers,
            body: body.into(),
        }
    }

    /// Returns `true` for the statuses the webservice uses on success (200, 201).
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self.code, 200 | 201)
    }

    /// Returns the first value of a header.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the webservice version from the `PSWS-Version` header.
    #[must_use]
    pub fn psws_version(&self) -> Option<&str> {
        self.header(PSWS_VERSION_HEADER)
    }

    /// Decodes the body as JSON. An empty body decodes to `null`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Decode`] if the body is not valid JSON.
    pub fn json(&self) -> Result<Value, HttpError> {
        if self.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&self.body).map_err(|e| HttpError::Decode {
            message: e.to_string(),
        })
    }

    /// Parses the body as an XML document and returns its root element.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Xml`] if the body is not well-formed XML.
    pub fn xml(&self) -> Result<XmlNode, HttpError> {
        Ok(XmlNode::parse(&self.body)?)
    }

    /// Extracts the error messages the webservice put in the body.
    ///
    /// Understands both the JSON form (`{"errors": [{"message": ...}]}`) and
    /// the XML form (`<errors><error><message>...</message></error></errors>`).
    /// Returns an empty list when the body carries no recognizable errors.
    #[must_use]
    pub fn provider_errors(&self) -> Vec<String> {
        if let Ok(Value::Object(body)) = serde_json::from_str::<Value>(&self.body) {
            return body
                .get("errors")
                .and_then(Value::as_array)
                .map(|errors| {
                    errors
                        .iter()
                        .filter_map(|e| e.get("message").and_then(Value::as_str))
                        .map(ToString::to_string)
                        .collect()
                })
                .unwrap_or_default();
        }

        let Ok(root) = XmlNode::parse(&self.body) else {
            return Vec::new();
        };
        root.child("errors")
            .map(|errors| {
                errors
                    .children
                    .iter()
                    .filter_map(|e| e.child("message").and_then(|m| m.text.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }
}
