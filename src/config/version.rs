//! PrestaShop webservice version handling.
//!
//! The webservice announces its version in the `PSWS-Version` response
//! header. This module parses that header and checks it against the range of
//! versions the SDK understands.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A dotted PrestaShop webservice version, e.g. `1.7.8.0` or `8.1.2`.
///
/// Missing trailing components compare as zero, so `8.1` equals `8.1.0.0`.
///
/// # Example
///
/// ```rust
/// use prestashop_api::WebserviceVersion;
///
/// let version: WebserviceVersion = "1.7.8.0".parse().unwrap();
/// assert!(version.is_compatible());
/// assert_eq!(version.to_string(), "1.7.8.0");
///
/// let old: WebserviceVersion = "1.3.7".parse().unwrap();
/// assert!(!old.is_compatible());
/// ```
#[derive(Clone, Debug)]
pub struct WebserviceVersion {
    parts: Vec<u32>,
}

impl WebserviceVersion {
    /// Oldest webservice version the SDK talks to.
    pub const MIN_COMPATIBLE: &'static str = "1.4.0.0";

    /// Newest webservice version the SDK talks to.
    pub const MAX_COMPATIBLE: &'static str = "9.99.99";

    /// Returns the numeric components of the version.
    #[must_use]
    pub fn parts(&self) -> &[u32] {
        &self.parts
    }

    /// Returns `true` when the version lies within
    /// [`MIN_COMPATIBLE`](Self::MIN_COMPATIBLE)..=[`MAX_COMPATIBLE`](Self::MAX_COMPATIBLE).
    #[must_use]
    pub fn is_compatible(&self) -> bool {
        let min = Self::bound(Self::MIN_COMPATIBLE);
        let max = Self::bound(Self::MAX_COMPATIBLE);
        *self >= min && *self <= max
    }

    fn bound(s: &str) -> Self {
        Self {
            parts: s.split('.').filter_map(|p| p.parse().ok()).collect(),
        }
    }

    fn component(&self, index: usize) -> u32 {
        self.parts.get(index).copied().unwrap_or(0)
    }
}

impl PartialEq for WebserviceVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for WebserviceVersion {}

impl PartialOrd for WebserviceVersion {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WebserviceVersion {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        let len = self.parts.len().max(other.parts.len());
        (0..len)
            .map(|i| self.component(i).cmp(&other.component(i)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(std::cmp::Ordering::Equal)
    }
}

impl fmt::Display for WebserviceVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.parts.iter().map(ToString::to_string).collect();
        f.write_str(&joined.join("."))
    }
}

impl FromStr for WebserviceVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || ConfigError::InvalidVersion {
            version: s.to_string(),
        };

        if s.is_empty() {
            return Err(invalid());
        }

        let parts = s
            .split('.')
            .map(|part| part.parse::<u32>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { parts })
    }
}
