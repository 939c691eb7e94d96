//! Filter encoding for list requests.
//!
//! The webservice filters listings with `filter[<field>]` query parameters
//! whose values carry an operator prefix such as `$eq:` or `$like:`. This
//! module translates operator tokens into those prefixes and escapes the
//! characters the webservice reserves for its own filter syntax.
//!
//! # Example
//!
//! ```rust
//! use prestashop_api::resources::{Condition, Filters};
//!
//! let filters = Filters::new()
//!     .with("active", "1")
//!     .with("name", ("like", "Mug (blue)"));
//!
//! let encoded = filters.encode().unwrap();
//! assert_eq!(encoded[0], ("filter[active]".to_string(), "$eq:1".to_string()));
//! assert_eq!(encoded[1], ("filter[name]".to_string(), "$like:Mug%20$(blue$)".to_string()));
//! # let _ = Condition::eq("1");
//! ```

use std::fmt;

use crate::clients::filter_key;
use crate::resources::ResourceError;

/// Characters the webservice reserves in filter values; each is escaped with `$`.
const RESERVED_CHARACTERS: &[char] = &['$', '(', ')', '*', '[', ']', ','];

/// Comparison operator of a filter condition.
///
/// Parsed from the tokens `=`, `==`, `!=`, `>`, `>=`, `<`, `<=`, `like`,
/// `in` and `!in`. Any other token is kept as [`Operator::Custom`] and sent
/// as `$<token>:`, so operators this crate does not know still reach the
/// webservice.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `=` or `==`.
    Eq,
    /// `!=`.
    Ne,
    /// `>`.
    Gt,
    /// `>=`.
    Gte,
    /// `<`.
    Lt,
    /// `<=`.
    Lte,
    /// `like`.
    Like,
    /// `in`.
    In,
    /// `!in`.
    NotIn,
    /// Any other token, passed through as the operator name.
    Custom(String),
}

impl Operator {
    /// Parses an operator token. Never fails.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "=" | "==" => Self::Eq,
            "!=" => Self::Ne,
            ">" => Self::Gt,
            ">=" => Self::Gte,
            "<" => Self::Lt,
            "<=" => Self::Lte,
            "like" => Self::Like,
            "in" => Self::In,
            "!in" => Self::NotIn,
            other => Self::Custom(other.to_string()),
        }
    }

    /// Returns the operator name used on the wire, without `$` and `:`.
    #[must_use]
    pub fn wire_name(&self) -> &str {
        match self {
            Self::Eq => "eq",
            Self::Ne => "ne",
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::Like => "like",
            Self::In => "in",
            Self::NotIn => "nin",
            Self::Custom(name) => name,
        }
    }

    /// Returns the prefix put in front of filter values, e.g. `$eq:`.
    #[must_use]
    pub fn prefix(&self) -> String {
        format!("${}:", self.wire_name())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix())
    }
}

impl From<&str> for Operator {
    fn from(token: &str) -> Self {
        Self::from_token(token)
    }
}

impl From<String> for Operator {
    fn from(token: String) -> Self {
        Self::from_token(&token)
    }
}

/// Translates an operator token into its webservice prefix.
///
/// # Example
///
/// ```rust
/// use prestashop_api::resources::translate_operator;
///
/// assert_eq!(translate_operator("=="), "$eq:");
/// assert_eq!(translate_operator("!in"), "$nin:");
/// assert_eq!(translate_operator("between"), "$between:");
/// ```
#[must_use]
pub fn translate_operator(token: &str) -> String {
    Operator::from_token(token).prefix()
}

/// Escapes a filter value.
///
/// Every reserved character (`$ ( ) * [ ] ,`) is prefixed with `$` in one
/// pass, then `%`, `+` and space are percent-encoded. The result is a
/// query-ready component, so a literal `%` reaches the webservice intact.
///
/// # Example
///
/// ```rust
/// use prestashop_api::resources::escape_filter_value;
///
/// assert_eq!(escape_filter_value("a(b)c"), "a$(b$)c");
/// assert_eq!(escape_filter_value("a b+c"), "a%20b%2Bc");
/// assert_eq!(escape_filter_value("%mug%"), "%25mug%25");
/// ```
#[must_use]
pub fn escape_filter_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if RESERVED_CHARACTERS.contains(&c) {
            escaped.push('$');
        }
        escaped.push(c);
    }
    escaped
        .replace('%', "%25")
        .replace('+', "%2B")
        .replace(' ', "%20")
}

/// A filter condition: an operator and the value it compares against.
///
/// A bare value converts into an equality condition; an `(operator, value)`
/// pair picks the operator from its token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Condition {
    operator: Operator,
    value: String,
}

impl Condition {
    /// Creates a condition.
    #[must_use]
    pub fn new(operator: impl Into<Operator>, value: impl Into<String>) -> Self {
        Self {
            operator: operator.into(),
            value: value.into(),
        }
    }

    /// Creates an equality condition.
    #[must_use]
    pub fn eq(value: impl Into<String>) -> Self {
        Self::new(Operator::Eq, value)
    }

    /// Returns the operator.
    #[must_use]
    pub const fn operator(&self) -> &Operator {
        &self.operator
    }

    /// Returns the unescaped value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the encoded query value, `<prefix><escaped value>`.
    #[must_use]
    pub fn encode(&self) -> String {
        format!("{}{}", self.operator.prefix(), escape_filter_value(&self.value))
    }
}

impl From<&str> for Condition {
    fn from(value: &str) -> Self {
        Self::eq(value)
    }
}

impl From<String> for Condition {
    fn from(value: String) -> Self {
        Self::eq(value)
    }
}

impl From<u64> for Condition {
    fn from(value: u64) -> Self {
        Self::eq(value.to_string())
    }
}

impl<O: Into<Operator>, V: Into<String>> From<(O, V)> for Condition {
    fn from((operator, value): (O, V)) -> Self {
        Self::new(operator, value)
    }
}

/// Ordered set of filter conditions keyed by field name.
///
/// Setting a field twice replaces its condition and keeps its position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filters {
    entries: Vec<(String, Condition)>,
}

impl Filters {
    /// Creates an empty filter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the condition for a field.
    pub fn insert(&mut self, field: impl Into<String>, condition: impl Into<Condition>) {
        let field = field.into();
        let condition = condition.into();
        if let Some(entry) = self.entries.iter_mut().find(|(name, _)| *name == field) {
            entry.1 = condition;
        } else {
            self.entries.push((field, condition));
        }
    }

    /// Sets the condition for a field and returns the set.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, condition: impl Into<Condition>) -> Self {
        self.insert(field, condition);
        self
    }

    /// Returns the condition for a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Condition> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, condition)| condition)
    }

    /// Returns `true` if a condition is set for the field.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Iterates over the conditions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Condition)> {
        self.entries.iter().map(|(name, c)| (name.as_str(), c))
    }

    /// Returns the number of conditions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no condition is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Encodes every condition as a `(filter[<field>], <value>)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidFilter`] if a field name is empty.
    pub fn encode(&self) -> Result<Vec<(String, String)>, ResourceError> {
        self.entries
            .iter()
            .map(|(field, condition)| {
                if field.trim().is_empty() {
                    return Err(ResourceError::InvalidFilter {
                        reason: format!(
                            "field name must not be empty (condition {})",
                            condition.encode()
                        ),
                    });
                }
                Ok((filter_key(field), condition.encode()))
            })
            .collect()
    }
}

impl<F, C> FromIterator<(F, C)> for Filters
where
    F: Into<String>,
    C: Into<Condition>,
{
    fn from_iter<I: IntoIterator<Item = (F, C)>>(iter: I) -> Self {
        let mut filters = Self::new();
        for (field, condition) in iter {
            filters.insert(field, condition);
        }
        filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_known_operators() {
        let cases = [
            ("=", "$eq:"),
            ("==", "$eq:"),
            ("!=", "$ne:"),
            (">", "$gt:"),
            (">=", "$gte:"),
            ("<", "$lt:"),
            ("<=", "$lte:"),
            ("like", "$like:"),
            ("in", "$in:"),
            ("!in", "$nin:"),
        ];
        for (token, prefix) in cases {
            assert_eq!(translate_operator(token), prefix, "token {token}");
        }
    }

    #[test]
    fn test_translate_unknown_operator_passes_through() {
        assert_eq!(translate_operator("between"), "$between:");
        assert_eq!(translate_operator("LIKE"), "$LIKE:");
        assert_eq!(
            Operator::from_token("between"),
            Operator::Custom("between".to_string())
        );
    }

    #[test]
    fn test_escape_reserved_characters() {
        assert_eq!(escape_filter_value("a(b)c"), "a$(b$)c");
        assert_eq!(escape_filter_value("[1,5]"), "$[1$,5$]");
        assert_eq!(escape_filter_value("5*"), "5$*");
    }

    #[test]
    fn test_escape_dollar_is_not_escaped_twice() {
        assert_eq!(escape_filter_value("$("), "$$$(");
        assert_eq!(escape_filter_value("$$"), "$$$$");
    }

    #[test]
    fn test_escape_encodes_plus_and_space_after_reserved() {
        assert_eq!(escape_filter_value("a b+c"), "a%20b%2Bc");
        assert_eq!(escape_filter_value("(a b)"), "$(a%20b$)");
    }

    #[test]
    fn test_escape_encodes_percent_before_plus_and_space() {
        assert_eq!(escape_filter_value("%mug%"), "%25mug%25");
        assert_eq!(escape_filter_value("A%20B"), "A%2520B");
        assert_eq!(escape_filter_value("50% +1"), "50%25%20%2B1");
    }

    #[test]
    fn test_condition_from_bare_value_is_equality() {
        let condition = Condition::from("Mug");
        assert_eq!(condition.operator(), &Operator::Eq);
        assert_eq!(condition.encode(), "$eq:Mug");
        assert_eq!(Condition::from(3_u64).encode(), "$eq:3");
    }

    #[test]
    fn test_condition_from_pair() {
        let condition = Condition::from(("!in", "1,2"));
        assert_eq!(condition.operator(), &Operator::NotIn);
        assert_eq!(condition.value(), "1,2");
        assert_eq!(condition.encode(), "$nin:1$,2");
    }

    #[test]
    fn test_filters_keep_insertion_order_and_replace_in_place() {
        let mut filters = Filters::new();
        filters.insert("name", ("like", "mug"));
        filters.insert("active", "1");
        filters.insert("name", ("like", "cup"));

        let fields: Vec<&str> = filters.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, ["name", "active"]);
        assert_eq!(filters.get("name").map(Condition::value), Some("cup"));
        assert_eq!(filters.len(), 2);
    }

    #[test]
    fn test_filters_encode_keys_and_values() {
        let filters: Filters = [("date_add", (">", "2020-01-01 00:00:00"))]
            .into_iter()
            .collect();

        assert_eq!(
            filters.encode().unwrap(),
            vec![(
                "filter[date_add]".to_string(),
                "$gt:2020-01-01%2000:00:00".to_string()
            )]
        );
    }

    #[test]
    fn test_filters_reject_empty_field_name() {
        let filters = Filters::new().with("", "1");
        assert!(matches!(
            filters.encode(),
            Err(ResourceError::InvalidFilter { .. })
        ));

        let filters = Filters::new().with("  ", "1");
        assert!(filters.encode().is_err());
    }
}
