//! Parameters of a list call.

use crate::resources::{Condition, Filters, Limit};

/// What a [`Builder::get`](crate::resources::Builder::get) call lists.
///
/// A query carries filters, an optional limit, whether each listed resource
/// should be fetched in full, and an optional raw URL that replaces the
/// resource-based request entirely.
///
/// # Example
///
/// ```rust
/// use prestashop_api::resources::{Limit, ListQuery};
///
/// let query = ListQuery::new()
///     .filter("active", "1")
///     .filter("name", ("like", "mug"))
///     .limit(Limit::Range { offset: 0, count: 20 })
///     .details(true);
///
/// assert_eq!(query.filters().len(), 2);
/// assert!(query.wants_details());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    filters: Filters,
    limit: Option<Limit>,
    details: bool,
    url: Option<String>,
}

impl ListQuery {
    /// Creates a query listing every resource, identifiers only.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filter condition on a field.
    #[must_use]
    pub fn filter(mut self, field: impl Into<String>, condition: impl Into<Condition>) -> Self {
        self.filters.insert(field, condition);
        self
    }

    /// Replaces all filters.
    #[must_use]
    pub fn filters_from(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }

    /// Sets the limit.
    #[must_use]
    pub fn limit(mut self, limit: impl Into<Limit>) -> Self {
        self.limit = Some(limit.into());
        self
    }

    /// Fetches every listed resource in full when set.
    #[must_use]
    pub const fn details(mut self, details: bool) -> Self {
        self.details = details;
        self
    }

    /// Requests this URL instead of building one from the entity.
    ///
    /// Filters and limit are ignored when a URL is set.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Returns the filters.
    #[must_use]
    pub const fn filters(&self) -> &Filters {
        &self.filters
    }

    /// Returns the limit.
    #[must_use]
    pub const fn get_limit(&self) -> Option<Limit> {
        self.limit
    }

    /// Returns `true` if listed resources are fetched in full.
    #[must_use]
    pub const fn wants_details(&self) -> bool {
        self.details
    }

    /// Returns the URL override.
    #[must_use]
    pub fn get_url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_is_empty() {
        let query = ListQuery::new();
        assert!(query.filters().is_empty());
        assert_eq!(query.get_limit(), None);
        assert!(!query.wants_details());
        assert_eq!(query.get_url(), None);
    }

    #[test]
    fn test_builder_methods_set_fields() {
        let query = ListQuery::new()
            .filter("id_customer", 3_u64)
            .limit(25_u32)
            .url("http://x/api/foo");

        assert_eq!(
            query.filters().get("id_customer").map(Condition::encode),
            Some("$eq:3".to_string())
        );
        assert_eq!(query.get_limit(), Some(Limit::Count(25)));
        assert_eq!(query.get_url(), Some("http://x/api/foo"));
    }

    #[test]
    fn test_filters_from_replaces_filters() {
        let query = ListQuery::new()
            .filter("name", "a")
            .filters_from(Filters::new().with("active", "1"));

        assert!(!query.filters().contains("name"));
        assert!(query.filters().contains("active"));
    }
}
