//! Resource trait binding a model type to its webservice names.
//!
//! # Implementing a Resource
//!
//! ```rust
//! use prestashop_api::resources::Resource;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Default, Serialize, Deserialize)]
//! #[serde(default)]
//! pub struct Carrier {
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub id: Option<u64>,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub name: Option<String>,
//! }
//!
//! impl Resource for Carrier {
//!     const ENTITY: &'static str = "carriers";
//!     const NODE: &'static str = "carrier";
//! }
//!
//! assert_eq!(Carrier::DETAILS_ENTITY, "carriers");
//! assert_eq!(Carrier::PRIMARY_KEY, "id");
//! ```

use serde::{de::DeserializeOwned, Serialize};

/// A webservice resource with a typed model.
///
/// Models must build from an identifier alone (`{"id": 1}`), so every field
/// other than the primary key should be optional or defaulted.
pub trait Resource: Serialize + DeserializeOwned + Send + Sync {
    /// Entity name used in URLs for listing and writes (e.g., "products").
    const ENTITY: &'static str;

    /// Entity name used to fetch one resource in full.
    const DETAILS_ENTITY: &'static str = Self::ENTITY;

    /// Element name of one resource in XML payloads (e.g., "product").
    const NODE: &'static str;

    /// Field identifying a resource.
    const PRIMARY_KEY: &'static str = "id";
}
