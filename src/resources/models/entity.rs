//! Untyped model for resources without a dedicated struct.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A resource held as its raw field map.
///
/// Use it with [`Builder::with_names`](crate::resources::Builder::with_names)
/// for any entity the webservice exposes.
///
/// # Example
///
/// ```rust
/// use prestashop_api::resources::models::Entity;
/// use serde_json::json;
///
/// let mut carrier = Entity::new();
/// carrier.insert("name", "Express");
/// carrier.insert("active", true);
///
/// assert_eq!(carrier.get("name"), Some(&json!("Express")));
/// assert_eq!(carrier.id(), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entity(Map<String, Value>);

impl Entity {
    /// Creates an entity without fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Sets a field.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.remove(field)
    }

    /// Returns the `id` field as a number, accepting numeric strings.
    #[must_use]
    pub fn id(&self) -> Option<u64> {
        match self.0.get("id")? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Returns all fields.
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consumes the entity and returns its fields.
    #[must_use]
    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Entity {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
