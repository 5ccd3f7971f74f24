//! In-memory scanner
//!
//! `MemoryTable` serves a `Vec` of records in fixed-size pages using the
//! same continuation-token contract as a real table: the token is the index
//! of the next record and is absent once the table is exhausted.

use crate::scan::{ScanOutput, ScanRequest, Scanner};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;

/// Scan request for a [`MemoryTable`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryScan {
    /// Page size for this request; the table's page size when unset
    pub limit: Option<usize>,
    /// Index to resume from
    pub exclusive_start_key: Option<usize>,
}

impl MemoryScan {
    /// Scan from the beginning with the table's page size
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the page size
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl ScanRequest for MemoryScan {
    type Key = usize;

    fn with_exclusive_start_key(mut self, key: usize) -> Self {
        self.exclusive_start_key = Some(key);
        self
    }
}

/// Errors raised by a [`MemoryTable`] scan
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryScanError {
    #[error("Start key {key} is beyond table length {len}")]
    StartKeyOutOfRange { key: usize, len: usize },

    #[error("Scan limit must be at least 1")]
    ZeroLimit,
}

/// A table held in memory
#[derive(Debug)]
pub struct MemoryTable<T> {
    items: Vec<T>,
    page_size: usize,
    full_page_tokens: bool,
    scans: AtomicUsize,
}

impl<T> MemoryTable<T> {
    /// Create a table served in pages of `page_size` (at least 1)
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        Self {
            items,
            page_size: page_size.max(1),
            full_page_tokens: false,
            scans: AtomicUsize::new(0),
        }
    }

    /// Return a token whenever a page is full, even at the end of the table.
    ///
    /// DynamoDB behaves this way, so a scan over a table whose length is a
    /// multiple of the page size ends with an empty page.
    #[must_use]
    pub fn with_full_page_tokens(mut self, enabled: bool) -> Self {
        self.full_page_tokens = enabled;
        self
    }

    /// Number of records in the table
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the table holds no records
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Default page size
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of scan calls served so far
    pub fn scan_count(&self) -> usize {
        self.scans.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<T> Scanner for MemoryTable<T>
where
    T: Clone + Send + Sync,
{
    type Request = MemoryScan;
    type Response = ScanOutput<T, usize>;
    type Error = MemoryScanError;

    async fn scan(&self, request: MemoryScan) -> Result<Self::Response, Self::Error> {
        self.scans.fetch_add(1, Ordering::SeqCst);

        let len = self.items.len();
        let start = request.exclusive_start_key.unwrap_or(0);
        if start > len {
            return Err(MemoryScanError::StartKeyOutOfRange { key: start, len });
        }

        let limit = request.limit.unwrap_or(self.page_size);
        if limit == 0 {
            return Err(MemoryScanError::ZeroLimit);
        }

        let end = start.saturating_add(limit).min(len);
        let items = self.items[start..end].to_vec();

        let full_page = end - start == limit;
        let last_evaluated_key = if end < len || (self.full_page_tokens && full_page) {
            Some(end)
        } else {
            None
        };

        Ok(ScanOutput {
            items: (!items.is_empty()).then_some(items),
            last_evaluated_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::{full_scan, full_scan_pages, ScanDepth, ScanOptions};
    use crate::scan::ScanResponse;
    use futures::TryStreamExt;
    use pretty_assertions::assert_eq;

    fn table(len: u32, page_size: usize) -> MemoryTable<u32> {
        MemoryTable::new((0..len).collect(), page_size)
    }

    #[tokio::test]
    async fn test_single_page() {
        let table = table(10, 4);
        let output = table.scan(MemoryScan::new()).await.unwrap();
        let (items, key) = output.into_parts();
        assert_eq!(items, vec![0, 1, 2, 3]);
        assert_eq!(key, Some(4));
        assert_eq!(table.scan_count(), 1);
    }

    #[tokio::test]
    async fn test_last_page_has_no_token() {
        let table = table(10, 4);
        let request = MemoryScan::new().with_exclusive_start_key(8);
        let (items, key) = table.scan(request).await.unwrap().into_parts();
        assert_eq!(items, vec![8, 9]);
        assert_eq!(key, None);
    }

    #[tokio::test]
    async fn test_full_page_tokens_add_trailing_empty_page() {
        let table = table(8, 4).with_full_page_tokens(true);
        let pages: Vec<_> = full_scan_pages(&table, MemoryScan::new())
            .try_collect()
            .await
            .unwrap();

        assert_eq!(pages.len(), 3);
        assert_eq!(pages[1].last_evaluated_key, Some(8));
        assert!(pages[2].is_empty());
        assert!(pages[2].is_last());
    }

    #[tokio::test]
    async fn test_request_limit_overrides_page_size() {
        let table = table(10, 4);
        let request = MemoryScan::new().with_limit(3);
        let pages: Vec<_> = full_scan_pages(&table, request)
            .try_collect()
            .await
            .unwrap();

        let sizes: Vec<usize> = pages.iter().map(|p| p.len()).collect();
        assert_eq!(sizes, vec![3, 3, 3, 1]);
    }

    #[tokio::test]
    async fn test_full_scan_over_table() {
        let table = table(25, 10);
        let items = full_scan(&table, MemoryScan::new(), &ScanOptions::default())
            .await
            .unwrap();
        assert_eq!(items, (0..25).collect::<Vec<_>>());
        assert_eq!(table.scan_count(), 3);
    }

    #[tokio::test]
    async fn test_full_scan_depth_over_table() {
        let table = table(25, 10);
        let options = ScanOptions::new().with_max_depth(ScanDepth::pages(2));
        let items = full_scan(&table, MemoryScan::new(), &options).await.unwrap();
        assert_eq!(items.len(), 20);
        assert_eq!(table.scan_count(), 2);
    }

    #[tokio::test]
    async fn test_empty_table() {
        let table: MemoryTable<u32> = MemoryTable::new(vec![], 5);
        assert!(table.is_empty());
        let output = table.scan(MemoryScan::new()).await.unwrap();
        assert_eq!(output, ScanOutput::empty());
    }

    #[tokio::test]
    async fn test_out_of_range_start_key() {
        let table = table(3, 2);
        let err = table
            .scan(MemoryScan::new().with_exclusive_start_key(9))
            .await
            .unwrap_err();
        assert_eq!(err, MemoryScanError::StartKeyOutOfRange { key: 9, len: 3 });
    }

    #[tokio::test]
    async fn test_zero_limit_is_rejected() {
        let table = table(3, 2);
        let err = table
            .scan(MemoryScan::new().with_limit(0))
            .await
            .unwrap_err();
        assert_eq!(err, MemoryScanError::ZeroLimit);
        assert_eq!(err.to_string(), "Scan limit must be at least 1");
    }

    #[test]
    fn test_page_size_is_at_least_one() {
        let table = table(3, 0);
        assert_eq!(table.page_size(), 1);
        assert_eq!(table.len(), 3);
    }
}
