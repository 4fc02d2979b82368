//! Shared fixtures: a scripted fetcher and sample pages

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use seo_scan::scanner::{FetchOutcome, FetchedPage, Fetcher, TransportError};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use url::Url;

/// A fetcher that answers from a fixed table and records every request
/// along with the timeout it was given
///
/// URLs missing from the table answer 404 with an empty body.
#[derive(Default)]
pub struct ScriptedFetcher {
    responses: HashMap<String, FetchOutcome>,
    requests: Mutex<Vec<(String, Duration)>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `url` with `status` and `body`, served from `url` itself
    pub fn page(self, url: &str, status: u16, body: &str) -> Self {
        self.redirect(url, url, status, body)
    }

    /// Answers `url` as if it redirected to `final_url`
    pub fn redirect(mut self, url: &str, final_url: &str, status: u16, body: &str) -> Self {
        let page = FetchedPage {
            status,
            status_text: reqwest::StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("")
                .to_string(),
            headers: HeaderMap::new(),
            final_url: Url::parse(final_url).unwrap(),
            body: body.to_string(),
        };
        self.responses.insert(url.to_string(), Ok(page));
        self
    }

    /// Fails `url` with a connection error
    pub fn unreachable(mut self, url: &str) -> Self {
        self.responses.insert(
            url.to_string(),
            Err(TransportError::Connect {
                url: url.to_string(),
                message: "connection refused".to_string(),
            }),
        );
        self
    }

    /// Fails `url` with a timeout
    pub fn timeout(mut self, url: &str) -> Self {
        self.responses.insert(
            url.to_string(),
            Err(TransportError::Timeout {
                url: url.to_string(),
            }),
        );
        self
    }

    /// Every URL requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.timed_requests()
            .into_iter()
            .map(|(url, _)| url)
            .collect()
    }

    /// Every URL requested so far with its timeout, in order
    pub fn timed_requests(&self) -> Vec<(String, Duration)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for ScriptedFetcher {
    async fn fetch(&self, url: &Url, timeout: Duration) -> FetchOutcome {
        self.requests
            .lock()
            .unwrap()
            .push((url.to_string(), timeout));

        match self.responses.get(url.as_str()) {
            Some(outcome) => outcome.clone(),
            None => Ok(FetchedPage {
                status: 404,
                status_text: "Not Found".to_string(),
                headers: HeaderMap::new(),
                final_url: url.clone(),
                body: String::new(),
            }),
        }
    }
}

pub const ROBOTS_TXT: &str = "User-agent: *\nDisallow: /admin\nSitemap: https://example.com/sitemap.xml\n";

pub const SITEMAP_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url><loc>https://example.com/</loc></url>
</urlset>"#;

/// A page that satisfies every page-local check
pub fn good_page() -> String {
    let words = "widgets ".repeat(600);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <title>Example Domain - Quality Widgets and Helpful Guides</title>
  <meta name="description" content="Example Domain sells quality widgets and publishes helpful guides on choosing, installing and maintaining widgets for homes, offices and workshops.">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <link rel="canonical" href="https://example.com/">
  <link rel="icon" href="/favicon.ico">
  <meta property="og:title" content="Example Domain">
  <meta property="og:description" content="Quality widgets">
  <meta property="og:image" content="https://example.com/og.png">
  <meta property="og:type" content="website">
  <meta property="og:url" content="https://example.com/">
  <meta name="twitter:card" content="summary_large_image">
  <meta name="twitter:title" content="Example Domain">
  <meta name="twitter:description" content="Quality widgets">
  <meta name="twitter:image" content="https://example.com/og.png">
  <script type="application/ld+json">{{"@context":"https://schema.org","@type":"Organization"}}</script>
  <script async src="https://www.googletagmanager.com/gtag/js?id=G-TEST"></script>
</head>
<body>
  <h1>Widgets</h1>
  <h2>Guides</h2>
  <img src="/hero.png" alt="A widget on a workbench">
  <nav><a href="/shop">Shop</a> <a href="/guides">Guides</a> <a href="/about">About</a></nav>
  <a href="https://partner.example.org/" rel="nofollow">Partner</a>
  <p>{}</p>
</body>
</html>"#,
        words
    )
}

/// A page with almost nothing on it
pub const BARE_PAGE: &str = "<html><body><p>Hello</p></body></html>";
