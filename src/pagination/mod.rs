//! Pagination module
//!
//! Supports: lazy page stream, lazy item stream, eager collection
//!
//! # Overview
//!
//! Every operation is built on one step that issues a scan call, hands the
//! page over, and derives the next request from the continuation token.
//! The lazy streams stop when the token is absent. The eager collector
//! also stops when its page budget runs out, and can sleep between pages.

mod delay;
mod paginator;
mod types;

pub use delay::pause;
pub use paginator::{
    full_scan, full_scan_pages, full_scan_stream, full_scan_summary, ItemStream, PageStream,
    ScanPaginator,
};
pub use types::{ScanDepth, ScanOptions, ScanSummary};
