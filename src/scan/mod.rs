//! Scan module
//!
//! Defines the seam between the paginator and a database client.
//!
//! # Overview
//!
//! - `Scanner` - the external single-shot scan capability
//! - `ScanRequest` - a request whose start key can be overridden
//! - `ScanResponse` - a page of items plus an optional continuation token
//! - `ScanOutput` - a plain `ScanResponse` value
//! - `Page` - a fetched page handed to stream consumers

mod types;

pub use types::{ItemOf, KeyOf, Page, ScanOutput, ScanRequest, ScanResponse, Scanner};
