//! Resource builders for the PrestaShop webservice.
//!
//! This module turns high-level list, find and write calls into
//! [`RequestOptions`](crate::clients::RequestOptions) and maps the answers
//! to models:
//!
//! - [`Builder`]: Accessor for one resource type
//! - [`ListQuery`], [`Filters`], [`Condition`], [`Limit`]: What to list
//! - [`Resource`]: Binds a model type to its entity names
//! - [`models`]: Typed models and the untyped [`models::Entity`]
//! - [`ResourceError`]: The error every builder call returns
//!
//! # Filters
//!
//! Filter values are sent as `filter[<field>]=<prefix><escaped value>`:
//!
//! | Token | Prefix |
//! |-------|--------|
//! | `=`, `==` | `$eq:` |
//! | `!=` | `$ne:` |
//! | `>`, `>=` | `$gt:`, `$gte:` |
//! | `<`, `<=` | `$lt:`, `$lte:` |
//! | `like` | `$like:` |
//! | `in`, `!in` | `$in:`, `$nin:` |
//! | anything else | `$<token>:` |
//!
//! # Example
//!
//! ```rust,ignore
//! use prestashop_api::resources::{Builder, Limit, ListQuery};
//! use prestashop_api::resources::models::Customer;
//!
//! let customers = Builder::<Customer, _>::new(&client);
//! let recent = customers
//!     .get(
//!         &ListQuery::new()
//!             .filter("date_add", (">", "2024-01-01 00:00:00"))
//!             .limit(Limit::Count(20))
//!             .details(true),
//!     )
//!     .await?;
//! ```

mod builder;
mod errors;
mod filter;
mod limit;
pub mod mapper;
pub mod models;
mod query;
mod resource;

pub use builder::{Builder, PAYLOAD_ROOT};
pub use errors::ResourceError;
pub use filter::{escape_filter_value, translate_operator, Condition, Filters, Operator};
pub use limit::Limit;
pub use query::ListQuery;
pub use resource::Resource;
