//! Scan seam types and traits
//!
//! The paginator only ever touches two things: the items and continuation
//! token of a response, and the start key of a request. Everything else
//! about a request or response is owned by the client.

use async_trait::async_trait;

/// A scan request whose start key can be overridden for the next page
pub trait ScanRequest: Clone + Send + Sync {
    /// Continuation token type (`LastEvaluatedKey` / `ExclusiveStartKey`)
    type Key: Clone + Send + Sync;

    /// Return this request resuming after `key`, every other field unchanged
    #[must_use]
    fn with_exclusive_start_key(self, key: Self::Key) -> Self;
}

/// A single page returned by a scan call
pub trait ScanResponse: Send {
    /// Record type carried by the page
    type Item: Send;
    /// Continuation token type
    type Key: Clone + Send + Sync;

    /// Split into the page items (absent means empty) and the continuation token
    fn into_parts(self) -> (Vec<Self::Item>, Option<Self::Key>);
}

/// The external scan capability
///
/// A scanner issues one request and returns one response. Retries,
/// authentication and transport belong to the implementation.
#[async_trait]
pub trait Scanner: Send + Sync {
    /// Request type
    type Request: ScanRequest;
    /// Response type; its token must be usable as the request's start key
    type Response: ScanResponse<Key = <Self::Request as ScanRequest>::Key>;
    /// Failure raised by a scan call
    type Error: std::error::Error + Send + Sync + 'static;

    /// Issue a single scan call
    async fn scan(&self, request: Self::Request) -> Result<Self::Response, Self::Error>;
}

/// Item type produced by a scanner
pub type ItemOf<S> = <<S as Scanner>::Response as ScanResponse>::Item;

/// Continuation token type used by a scanner
pub type KeyOf<S> = <<S as Scanner>::Request as ScanRequest>::Key;

/// Plain response value for scanners without a response type of their own
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutput<T, K> {
    /// Items in the page, if any
    pub items: Option<Vec<T>>,
    /// Token to resume the scan from, if more data remains
    pub last_evaluated_key: Option<K>,
}

impl<T, K> ScanOutput<T, K> {
    /// Create an output from items and an optional token
    pub fn new(items: Vec<T>, last_evaluated_key: Option<K>) -> Self {
        Self {
            items: Some(items),
            last_evaluated_key,
        }
    }

    /// Create a final output with no items and no token
    pub fn empty() -> Self {
        Self {
            items: None,
            last_evaluated_key: None,
        }
    }

    /// Check if more data remains after this output
    pub fn has_more(&self) -> bool {
        self.last_evaluated_key.is_some()
    }
}

impl<T, K> ScanResponse for ScanOutput<T, K>
where
    T: Send,
    K: Clone + Send + Sync,
{
    type Item = T;
    type Key = K;

    fn into_parts(self) -> (Vec<T>, Option<K>) {
        (self.items.unwrap_or_default(), self.last_evaluated_key)
    }
}

/// One fetched page as seen by consumers of the page stream
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T, K> {
    /// 1-based page number in fetch order
    pub number: usize,
    /// Items in the order the scanner returned them
    pub items: Vec<T>,
    /// Token returned with this page; `None` on the final page
    pub last_evaluated_key: Option<K>,
}

impl<T, K> Page<T, K> {
    /// Check if this is the final page of the scan
    pub fn is_last(&self) -> bool {
        self.last_evaluated_key.is_none()
    }

    /// Number of items in the page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the page carried no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
