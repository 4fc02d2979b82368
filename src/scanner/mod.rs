//! Scanner module: fetching, parsing and orchestrating a single-page scan
//!
//! This module handles:
//! - Fetching the page and its auxiliary resources through a [`Fetcher`]
//! - Parsing the page into a queryable [`Document`]
//! - Turning failures into categorized [`ScanError`]s
//! - Producing the final [`ScanReport`]

mod document;
mod error;
mod fetcher;
mod orchestrator;
mod report;

pub use document::Document;
pub use error::{ErrorCategory, ScanError, ScanFailure};
pub use fetcher::{build_http_client, FetchOutcome, FetchedPage, Fetcher, HttpFetcher, TransportError};
pub use orchestrator::Scanner;
pub use report::{score_band, ScanReport, StatusCounts};
