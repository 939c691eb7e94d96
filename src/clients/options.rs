//! Request options handed from builders to a transport.
//!
//! [`RequestOptions`] is the string map the webservice library has always
//! used to describe a call: which resource (or raw URL), which query
//! parameters and, for writes, which XML payload.

use std::collections::BTreeMap;

/// Well-known option keys.
pub mod keys {
    /// Resource name, e.g. `products`.
    pub const RESOURCE: &str = "resource";
    /// Raw URL replacing resource-based URL construction.
    pub const URL: &str = "url";
    /// Resource identifier, appended to the resource path.
    pub const ID: &str = "id";
    /// Response format; builders always ask for `JSON`.
    pub const OUTPUT_FORMAT: &str = "output_format";
    /// Pagination, `N` or `offset,N`.
    pub const LIMIT: &str = "limit";
    /// Date-range flag, set when filtering on `date_add`.
    pub const DATE: &str = "date";
    /// XML payload of a create call.
    pub const POST_XML: &str = "postXml";
    /// XML payload of an update call.
    pub const PUT_XML: &str = "putXml";
    /// Schema selector (`blank` or `synopsis`).
    pub const SCHEMA: &str = "schema";
}

/// Value of the `output_format` option used on every read.
pub const OUTPUT_FORMAT_JSON: &str = "JSON";

/// Returns the option key for a filter on `field`, i.e. `filter[<field>]`.
#[must_use]
pub fn filter_key(field: &str) -> String {
    format!("filter[{field}]")
}

/// Options describing one webservice call.
///
/// A sorted map: keys iterate in lexicographic order whatever the insertion
/// order, so the resulting query strings are stable.
///
/// # Example
///
/// ```rust
/// use prestashop_api::clients::{keys, RequestOptions};
///
/// let mut options = RequestOptions::new();
/// options.insert(keys::RESOURCE, "products");
/// options.insert(keys::OUTPUT_FORMAT, "JSON");
///
/// assert_eq!(options.resource(), Some("products"));
/// assert_eq!(options.get(keys::OUTPUT_FORMAT), Some("JSON"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    entries: BTreeMap<String, String>,
}

impl RequestOptions {
    /// Creates an empty option map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an option, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Merges every entry of `other` into `self`; later values win.
    pub fn merge<I, K, V>(&mut self, other: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in other {
            self.insert(key, value);
        }
    }

    /// Returns the value of an option.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns `true` if the option is set.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the `resource` option.
    #[must_use]
    pub fn resource(&self) -> Option<&str> {
        self.get(keys::RESOURCE)
    }

    /// Returns the `url` option.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.get(keys::URL)
    }

    /// Iterates over all options in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no option is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RequestOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Self::new();
        options.merge(iter);
        options
    }
}
