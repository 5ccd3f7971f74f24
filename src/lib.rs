//! # scan-pager
//!
//! Lazy and eager pagination over a document database's scan operation.
//!
//! ## Features
//!
//! - **Lazy streams**: items or whole pages, fetched only as they are consumed
//! - **Eager collection**: one `Vec` with an optional page budget and inter-page delay
//! - **Opaque records**: requests, responses and items stay client-defined
//! - **DynamoDB**: `aws-sdk-dynamodb` support behind the `dynamodb` feature
//!
//! ## Quick Start
//!
//! ```rust
//! use scan_pager::memory::{MemoryScan, MemoryTable};
//! use scan_pager::pagination::{full_scan, full_scan_stream, ScanDepth, ScanOptions};
//! use futures::TryStreamExt;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> scan_pager::Result<()> {
//! let table = MemoryTable::new((1..=10).collect::<Vec<u32>>(), 4);
//!
//! // Lazily, page by page
//! let items: Vec<u32> = full_scan_stream(&table, MemoryScan::new()).try_collect().await?;
//! assert_eq!(items.len(), 10);
//!
//! // Eagerly, at most two pages
//! let options = ScanOptions::new().with_max_depth(ScanDepth::pages(2));
//! let items = full_scan(&table, MemoryScan::new(), &options).await?;
//! assert_eq!(items, vec![1, 2, 3, 4, 5, 6, 7, 8]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────┬─────────────────────────────┐
//! │ full_scan_stream/full_scan_pages│ full_scan/full_scan_summary │
//! │ lazy Stream                     │ Vec, depth budget, delay    │
//! └────────────────┬────────────────┴──────────────┬──────────────┘
//!                  └── fetch page, advance key ────┘
//!                                 │
//! ┌───────────────────────────────┴───────────────────────────────┐
//! │                    Scanner::scan(request)                     │
//! │          MemoryTable          aws_sdk_dynamodb::Client        │
//! └───────────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Scanner seam traits and page types
pub mod scan;

/// Lazy and eager pagination
pub mod pagination;

/// In-memory scanner
pub mod memory;

/// DynamoDB scanner
#[cfg(feature = "dynamodb")]
pub mod dynamodb;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use pagination::{
    full_scan, full_scan_pages, full_scan_stream, full_scan_summary, ScanDepth, ScanOptions,
    ScanPaginator, ScanSummary,
};
pub use scan::{Page, ScanOutput, ScanRequest, ScanResponse, Scanner};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
