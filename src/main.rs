//! seo-scan main entry point
//!
//! This is the command-line interface for the seo-scan single-page auditor.

use anyhow::Context;
use clap::Parser;
use seo_scan::config::{load_config, validate, Config, OutputFormat};
use seo_scan::output::{renderer_for, write_output};
use seo_scan::Scanner;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// seo-scan: a single-page SEO auditor
///
/// Fetches the home page of a domain along with its robots.txt and sitemap,
/// then scores it against 21 on-page, technical and social checks.
#[derive(Parser, Debug)]
#[command(name = "seo-scan")]
#[command(version = "1.0.0")]
#[command(about = "A single-page SEO auditor", long_about = None)]
struct Cli {
    /// Domain to scan, e.g. example.com (an http:// or https:// prefix is allowed)
    #[arg(value_name = "DOMAIN")]
    domain: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Page timeout in seconds (overrides the config file)
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(&cli)?;
    let renderer = renderer_for(config.output.format);

    let scanner = Scanner::from_config(&config.http).context("Failed to build HTTP client")?;

    let (rendered, exit_code) = match scanner.scan(&cli.domain).await {
        Ok(report) => (renderer.render_report(&report)?, ExitCode::SUCCESS),
        Err(error) => (renderer.render_error(&error)?, ExitCode::FAILURE),
    };

    write_output(&rendered, cli.output.as_deref()).context("Failed to write report")?;

    Ok(exit_code)
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so stdout carries only the report.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("seo_scan=info,warn"),
            1 => EnvFilter::new("seo_scan=debug,info"),
            2 => EnvFilter::new("seo_scan=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the config file (if any) and applies command-line overrides
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if let Some(timeout) = cli.timeout {
        config.http.page_timeout_secs = timeout;
    }

    validate(&config).context("Invalid configuration")?;
    tracing::debug!("Effective configuration: {:?}", config);

    Ok(config)
}
