//! Configuration module for seo-scan
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every setting has a default, so scanning works without
//! a file.
//!
//! # Example
//!
//! ```no_run
//! use seo_scan::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("seo-scan.toml")).unwrap();
//! println!("Page timeout: {}s", config.http.page_timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, HttpConfig, OutputConfig, OutputFormat, DEFAULT_USER_AGENT};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
