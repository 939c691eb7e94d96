//! Shared field types and deserializers for webservice models.
//!
//! The webservice is loose with scalar types: identifiers arrive as numbers
//! in JSON and as strings in XML, flags as `"1"`/`"0"`, and unset dates as
//! `0000-00-00 00:00:00`. The helpers here accept every form.

use chrono::NaiveDateTime;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::xml::TEXT_KEY;

/// Date-time format used by the webservice.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Reads an identifier from a number or a numeric string; empty means unset.
pub(crate) fn optional_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_u64()
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid identifier {n}"))),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid identifier {s:?}"))),
        Some(other) => Err(de::Error::custom(format!("invalid identifier {other}"))),
    }
}

/// Reads a flag from a boolean, `0`/`1` or their string forms.
pub(crate) fn optional_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(b)),
        Some(Value::Number(n)) => Ok(Some(n.as_f64().is_some_and(|n| n != 0.0))),
        Some(Value::String(s)) => match s.trim() {
            "" => Ok(None),
            "1" | "true" => Ok(Some(true)),
            "0" | "false" => Ok(Some(false)),
            other => Err(de::Error::custom(format!("invalid flag {other:?}"))),
        },
        Some(other) => Err(de::Error::custom(format!("invalid flag {other}"))),
    }
}

/// Reads a scalar as text, so `12.5` and `"12.500000"` both fit a string field.
pub(crate) fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(if b { "1" } else { "0" }.to_string())),
        Some(other) => Err(de::Error::custom(format!("expected a scalar, got {other}"))),
    }
}

/// Reads a webservice date-time; empty and zero dates mean unset.
pub(crate) fn optional_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() || raw.starts_with("0000-00-00") {
        return Ok(None);
    }
    NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT)
        .map(Some)
        .map_err(|e| de::Error::custom(format!("invalid date {raw:?}: {e}")))
}

/// A field value for one language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageValue {
    /// Language identifier.
    pub language_id: u64,
    /// Text in that language.
    pub value: String,
}

/// A multilingual field such as a product name.
///
/// Reads either a plain string (a shop queried for one language), the JSON
/// form `[{"id": "1", "value": "Mug"}]`, or the XML form
/// `<name><language id="1">Mug</language></name>`. Localized values are
/// written back in the XML form.
///
/// # Example
///
/// ```rust
/// use prestashop_api::resources::models::Translatable;
/// use serde_json::json;
///
/// let name: Translatable =
///     serde_json::from_value(json!([{"id": "1", "value": "Mug"}, {"id": "2", "value": "Tasse"}]))
///         .unwrap();
/// assert_eq!(name.get(2), Some("Tasse"));
/// assert_eq!(name.first(), Some("Mug"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Translatable {
    /// A single value without language information.
    Plain(String),
    /// One value per language.
    Localized(Vec<LanguageValue>),
}

impl Translatable {
    /// Creates a value for a single language.
    #[must_use]
    pub fn single(language_id: u64, value: impl Into<String>) -> Self {
        Self::Localized(vec![LanguageValue {
            language_id,
            value: value.into(),
        }])
    }

    /// Returns the value for a language.
    ///
    /// A plain value is returned for every language.
    #[must_use]
    pub fn get(&self, language_id: u64) -> Option<&str> {
        match self {
            Self::Plain(value) => Some(value),
            Self::Localized(values) => values
                .iter()
                .find(|v| v.language_id == language_id)
                .map(|v| v.value.as_str()),
        }
    }

    /// Returns the first value.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::Plain(value) => Some(value),
            Self::Localized(values) => values.first().map(|v| v.value.as_str()),
        }
    }

    fn from_value(value: Value) -> Result<Self, String> {
        match value {
            Value::String(s) => Ok(Self::Plain(s)),
            Value::Number(n) => Ok(Self::Plain(n.to_string())),
            Value::Array(items) => items
                .into_iter()
                .map(|item| language_value(&item, "id", "value"))
                .collect::<Result<_, _>>()
                .map(Self::Localized),
            Value::Object(mut map) => {
                let languages = match map.remove("language") {
                    Some(Value::Array(items)) => items,
                    Some(single) => vec![single],
                    None => return Err("expected a `language` element".to_string()),
                };
                languages
                    .iter()
                    .map(|item| language_value(item, "@id", TEXT_KEY))
                    .collect::<Result<_, _>>()
                    .map(Self::Localized)
            }
            other => Err(format!("invalid multilingual value {other}")),
        }
    }
}

fn language_value(item: &Value, id_key: &str, value_key: &str) -> Result<LanguageValue, String> {
    let id = match item.get(id_key) {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
    .ok_or_else(|| format!("language entry without a valid `{id_key}`: {item}"))?;

    let value = match item.get(value_key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    };

    Ok(LanguageValue {
        language_id: id,
        value,
    })
}

impl<'de> Deserialize<'de> for Translatable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Self::from_value(Value::deserialize(deserializer)?).map_err(de::Error::custom)
    }
}

impl Serialize for Translatable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Plain(value) => serializer.serialize_str(value),
            Self::Localized(values) => {
                let languages: Vec<Value> = values
                    .iter()
                    .map(|v| json!({"@id": v.language_id.to_string(), TEXT_KEY: v.value}))
                    .collect();
                let mut map = Map::new();
                map.insert("language".to_string(), Value::Array(languages));
                Value::Object(map).serialize(serializer)
            }
        }
    }
}

impl From<&str> for Translatable {
    fn from(value: &str) -> Self {
        Self::Plain(value.to_string())
    }
}

impl From<String> for Translatable {
    fn from(value: String) -> Self {
        Self::Plain(value)
    }
}
