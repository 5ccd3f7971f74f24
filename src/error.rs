//! Error types for scan-pager
//!
//! Pagination itself has exactly one failure kind: the scan call failed.
//! The remaining variants only come from loading [`ScanOptions`] out of
//! configuration text.
//!
//! [`ScanOptions`]: crate::pagination::ScanOptions

use thiserror::Error;

/// Boxed error raised by a scanner
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The main error type for scan-pager
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Scan Errors
    // ============================================================================
    /// The external scan call failed while fetching `page` (1-based)
    #[error("Scan failed on page {page}: {source}")]
    Scan {
        page: usize,
        #[source]
        source: BoxError,
    },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl Error {
    /// Wrap a scanner failure for the given page
    pub fn scan(page: usize, source: impl Into<BoxError>) -> Self {
        Self::Scan {
            page,
            source: source.into(),
        }
    }

    /// Check if this error came from the scan capability
    pub fn is_scan(&self) -> bool {
        matches!(self, Self::Scan { .. })
    }

    /// Page number whose fetch failed, for scan errors
    pub fn page(&self) -> Option<usize> {
        match self {
            Self::Scan { page, .. } => Some(*page),
            _ => None,
        }
    }

    /// Borrow the scanner's own error, if it is of type `E`
    pub fn scan_source<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            Self::Scan { source, .. } => source.downcast_ref::<E>(),
            _ => None,
        }
    }
}

/// Result type alias for scan-pager
pub type Result<T> = std::result::Result<T, Error>;
