//! Integration tests for seo-scan
//!
//! `scan_tests` drive full scans through a scripted in-memory fetcher so that
//! real domain names pass validation. `http_tests` use wiremock to exercise
//! the reqwest-backed fetcher and the network metrics end-to-end.

mod scan_tests;
mod support;
