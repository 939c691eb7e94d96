//! Models for webservice resources.
//!
//! Typed models implement [`Resource`](crate::resources::Resource) and can be
//! used with [`Builder::new`](crate::resources::Builder::new). Every field is
//! optional so that a model can stand for a resource known only by its
//! identifier. Fields the webservice computes (dates, references, flags such
//! as `deleted`) are read but never sent back.
//!
//! [`Entity`] covers every other resource as a raw field map.
//!
//! # Example
//!
//! ```rust
//! use prestashop_api::resources::models::{Product, Translatable};
//!
//! let product = Product {
//!     price: Some("9.99".to_string()),
//!     name: Some(Translatable::single(1, "Mug")),
//!     ..Default::default()
//! };
//! assert_eq!(product.name.as_ref().and_then(|n| n.get(1)), Some("Mug"));
//! ```

mod address;
mod category;
mod common;
mod customer;
mod entity;
mod order;
mod product;

pub use address::Address;
pub use category::Category;
pub use common::{LanguageValue, Translatable, DATETIME_FORMAT};
pub use customer::Customer;
pub use entity::Entity;
pub use order::Order;
pub use product::Product;
