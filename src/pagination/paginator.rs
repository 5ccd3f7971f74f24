//! Scan paginator
//!
//! One page-fetch-and-advance step drives both the lazy streams and the
//! eager collector.

use super::delay::pause;
use super::types::{ScanDepth, ScanOptions, ScanSummary};
use crate::error::{Error, Result};
use crate::scan::{ItemOf, KeyOf, Page, ScanRequest, ScanResponse, Scanner};
use futures::stream::{self, Stream, TryStreamExt};
use std::pin::Pin;
use tracing::{debug, warn};

/// Stream of fetched pages
pub type PageStream<'a, T, K> = Pin<Box<dyn Stream<Item = Result<Page<T, K>>> + Send + 'a>>;

/// Stream of scanned items
pub type ItemStream<'a, T> = Pin<Box<dyn Stream<Item = Result<T>> + Send + 'a>>;

/// Position of a scan between pages
struct Cursor<R> {
    /// Request for the next page; `None` once the scan is finished
    next: Option<R>,
    /// Pages fetched so far
    fetched: usize,
}

/// Fetch one page and derive the request for the page after it
async fn advance<S>(
    scanner: &S,
    request: S::Request,
    number: usize,
) -> Result<(Page<ItemOf<S>, KeyOf<S>>, Option<S::Request>)>
where
    S: Scanner + ?Sized,
{
    let response = match scanner.scan(request.clone()).await {
        Ok(response) => response,
        Err(e) => {
            warn!("Scan call failed on page {}: {}", number, e);
            return Err(Error::scan(number, e));
        }
    };

    let (items, last_evaluated_key) = response.into_parts();
    debug!(
        "Page {}: fetched {} items, more: {}",
        number,
        items.len(),
        last_evaluated_key.is_some()
    );

    let next = last_evaluated_key
        .clone()
        .map(|key| request.with_exclusive_start_key(key));

    Ok((
        Page {
            number,
            items,
            last_evaluated_key,
        },
        next,
    ))
}

/// Lazily fetch pages until the scanner stops returning a continuation token.
///
/// A failed call is yielded once as `Err`, after which the stream ends.
pub fn full_scan_pages<'a, S>(
    scanner: &'a S,
    request: S::Request,
) -> PageStream<'a, ItemOf<S>, KeyOf<S>>
where
    S: Scanner + ?Sized,
{
    let cursor = Cursor {
        next: Some(request),
        fetched: 0,
    };

    Box::pin(stream::try_unfold(cursor, move |mut cursor| async move {
        let Some(request) = cursor.next.take() else {
            return Ok(None);
        };
        cursor.fetched += 1;
        let (page, next) = advance(scanner, request, cursor.fetched).await?;
        cursor.next = next;
        Ok::<_, Error>(Some((page, cursor)))
    }))
}

/// Lazily yield every item of a scan, pages concatenated in fetch order
pub fn full_scan_stream<'a, S>(scanner: &'a S, request: S::Request) -> ItemStream<'a, ItemOf<S>>
where
    S: Scanner + ?Sized,
{
    Box::pin(
        full_scan_pages(scanner, request)
            .map_ok(|page| stream::iter(page.items.into_iter().map(Ok::<_, Error>)))
            .try_flatten(),
    )
}

/// Collect a scan into one list, honouring the page budget and delay
pub async fn full_scan<S>(
    scanner: &S,
    request: S::Request,
    options: &ScanOptions,
) -> Result<Vec<ItemOf<S>>>
where
    S: Scanner + ?Sized,
{
    full_scan_summary(scanner, request, options)
        .await
        .map(|summary| summary.items)
}

/// Like [`full_scan`], also reporting pages fetched and where to resume
pub async fn full_scan_summary<S>(
    scanner: &S,
    request: S::Request,
    options: &ScanOptions,
) -> Result<ScanSummary<ItemOf<S>, KeyOf<S>>>
where
    S: Scanner + ?Sized,
{
    let mut summary = ScanSummary::new();

    let mut remaining = match options.max_depth {
        ScanDepth::Pages(0) => return Ok(summary),
        ScanDepth::Pages(count) => Some(count),
        ScanDepth::Unlimited => None,
    };

    let mut pages = full_scan_pages(scanner, request);
    while let Some(page) = pages.try_next().await? {
        summary.pages_fetched += 1;
        summary.items.extend(page.items);

        if let Some(left) = remaining.as_mut() {
            *left -= 1;
            if *left == 0 {
                if page.last_evaluated_key.is_some() {
                    debug!(
                        "Page budget of {} reached with more data remaining",
                        summary.pages_fetched
                    );
                }
                summary.resume_key = page.last_evaluated_key;
                break;
            }
        }

        if page.last_evaluated_key.is_none() {
            break;
        }

        pause(options.sleep_wait).await;
    }

    debug!(
        "Scan collected {} items in {} pages",
        summary.items.len(),
        summary.pages_fetched
    );

    Ok(summary)
}

/// Builder over a borrowed scanner and an initial request
///
/// `ScanOptions` apply to [`collect`](Self::collect) and
/// [`collect_with_stats`](Self::collect_with_stats). The streams are driven
/// by the consumer, who stops early by dropping them.
pub struct ScanPaginator<'a, S: Scanner + ?Sized> {
    scanner: &'a S,
    request: S::Request,
    options: ScanOptions,
}

impl<'a, S: Scanner + ?Sized> ScanPaginator<'a, S> {
    /// Create a paginator with default options
    pub fn new(scanner: &'a S, request: S::Request) -> Self {
        Self {
            scanner,
            request,
            options: ScanOptions::default(),
        }
    }

    /// Replace all options
    #[must_use]
    pub fn with_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the page budget
    #[must_use]
    pub fn max_depth(mut self, depth: impl Into<ScanDepth>) -> Self {
        self.options.max_depth = depth.into();
        self
    }

    /// Set the delay between pages
    #[must_use]
    pub fn sleep_wait(mut self, delay: std::time::Duration) -> Self {
        self.options.sleep_wait = delay;
        self
    }

    /// Get the configured options
    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Get the initial request
    pub fn request(&self) -> &S::Request {
        &self.request
    }

    /// Lazily fetch pages
    pub fn pages(self) -> PageStream<'a, ItemOf<S>, KeyOf<S>> {
        full_scan_pages(self.scanner, self.request)
    }

    /// Lazily yield items
    pub fn items(self) -> ItemStream<'a, ItemOf<S>> {
        full_scan_stream(self.scanner, self.request)
    }

    /// Collect all items
    pub async fn collect(self) -> Result<Vec<ItemOf<S>>> {
        full_scan(self.scanner, self.request, &self.options).await
    }

    /// Collect all items with a summary
    pub async fn collect_with_stats(self) -> Result<ScanSummary<ItemOf<S>, KeyOf<S>>> {
        full_scan_summary(self.scanner, self.request, &self.options).await
    }
}
