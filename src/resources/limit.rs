//! Pagination for list requests.

use std::fmt;

use crate::clients::keys;

/// How many resources a listing returns, and from which offset.
///
/// Encoded as the `limit` query parameter: `N` for a count, `offset,N` for a
/// range.
///
/// # Example
///
/// ```rust
/// use prestashop_api::resources::Limit;
///
/// assert_eq!(Limit::from(10_u32).to_string(), "10");
/// assert_eq!(Limit::from((20_u32, 10_u32)).to_string(), "20,10");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Limit {
    /// The first `N` resources.
    Count(u32),
    /// `count` resources starting at `offset`.
    Range {
        /// Number of resources to skip.
        offset: u32,
        /// Number of resources to return.
        count: u32,
    },
}

impl Limit {
    /// Returns the `limit` option entry for an optional limit.
    ///
    /// No limit produces no entry, leaving the webservice default in place.
    #[must_use]
    pub fn encode(limit: Option<Self>) -> Option<(&'static str, String)> {
        limit.map(|limit| (keys::LIMIT, limit.to_string()))
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(count) => write!(f, "{count}"),
            Self::Range { offset, count } => write!(f, "{offset},{count}"),
        }
    }
}

impl From<u32> for Limit {
    fn from(count: u32) -> Self {
        Self::Count(count)
    }
}

impl From<(u32, u32)> for Limit {
    fn from((offset, count): (u32, u32)) -> Self {
        Self::Range { offset, count }
    }
}
