//! Pagination types
//!
//! Depth budget, scan options and the eager scan summary.

use crate::error::Result;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::time::Duration;

/// How many pages an eager scan may fetch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanDepth {
    /// Keep fetching until the scanner stops returning a continuation token
    #[default]
    Unlimited,
    /// Fetch at most this many pages, including the first; `0` fetches nothing
    Pages(usize),
}

impl ScanDepth {
    /// Create a page budget
    pub fn pages(count: usize) -> Self {
        Self::Pages(count)
    }

    /// Check if no page limit applies
    pub fn is_unlimited(&self) -> bool {
        matches!(self, Self::Unlimited)
    }

    /// Remaining page budget, `None` when unlimited
    pub fn limit(&self) -> Option<usize> {
        match self {
            Self::Unlimited => None,
            Self::Pages(count) => Some(*count),
        }
    }
}

/// Negative values mean unlimited
impl From<i64> for ScanDepth {
    fn from(depth: i64) -> Self {
        usize::try_from(depth).map_or(Self::Unlimited, Self::Pages)
    }
}

impl Serialize for ScanDepth {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Unlimited => serializer.serialize_i64(-1),
            Self::Pages(count) => serializer.serialize_u64(*count as u64),
        }
    }
}

/// Accepts an integer or null; null and negatives are unlimited
impl<'de> Deserialize<'de> for ScanDepth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let depth = Option::<i64>::deserialize(deserializer)?;
        Ok(depth.map_or(Self::Unlimited, Self::from))
    }
}

/// Options for an eager scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOptions {
    /// Page budget
    #[serde(default)]
    pub max_depth: ScanDepth,

    /// Delay between pages; zero disables it
    #[serde(default, rename = "sleep_wait_ms", with = "duration_ms")]
    pub sleep_wait: Duration,
}

impl ScanOptions {
    /// Create options with no page limit and no delay
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page budget
    #[must_use]
    pub fn with_max_depth(mut self, depth: impl Into<ScanDepth>) -> Self {
        self.max_depth = depth.into();
        self
    }

    /// Set the delay between pages
    #[must_use]
    pub fn with_sleep_wait(mut self, delay: Duration) -> Self {
        self.sleep_wait = delay;
        self
    }

    /// Load options from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load options from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    #[allow(clippy::cast_possible_truncation)]
    pub fn serialize<S: Serializer>(delay: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(delay.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let millis = Option::<u64>::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis.unwrap_or(0)))
    }
}

/// Result of an eager scan with bookkeeping
#[derive(Debug, Clone, PartialEq)]
pub struct ScanSummary<T, K> {
    /// All collected items in fetch order
    pub items: Vec<T>,
    /// Number of scan calls made
    pub pages_fetched: usize,
    /// Token to resume from when the page budget stopped the scan early
    pub resume_key: Option<K>,
}

impl<T, K> ScanSummary<T, K> {
    /// Create an empty summary
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            pages_fetched: 0,
            resume_key: None,
        }
    }

    /// Check if the scan reached the end of the table
    pub fn is_complete(&self) -> bool {
        self.resume_key.is_none()
    }

    /// Number of collected items
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl<T, K> Default for ScanSummary<T, K> {
    fn default() -> Self {
        Self::new()
    }
}
