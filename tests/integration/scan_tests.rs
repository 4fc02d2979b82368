//! Full scans driven by the scripted fetcher

use crate::support::{good_page, ScriptedFetcher, BARE_PAGE, ROBOTS_TXT, SITEMAP_XML};
use seo_scan::config::HttpConfig;
use seo_scan::metrics::REGISTRY;
use seo_scan::{aggregate, ErrorCategory, MetricStatus, Scanner};
use std::time::Duration;

fn scanner(fetcher: ScriptedFetcher) -> Scanner<ScriptedFetcher> {
    Scanner::new(fetcher, &HttpConfig::default())
}

fn healthy_site() -> ScriptedFetcher {
    ScriptedFetcher::new()
        .page("https://example.com/", 200, &good_page())
        .page("https://example.com/robots.txt", 200, ROBOTS_TXT)
        .page("https://example.com/sitemap.xml", 200, SITEMAP_XML)
}

#[tokio::test]
async fn test_invalid_domains_fail_before_fetching() {
    for input in ["not a domain", "-bad.com", "a..b", "", "   ", "example.com/path"] {
        let scanner = scanner(ScriptedFetcher::new());

        let error = scanner.scan(input).await.unwrap_err();

        assert_eq!(error.category, ErrorCategory::Validation, "input {:?}", input);
        assert_eq!(error.status_code, 400);
        assert!(scanner.fetcher().requests().is_empty(), "input {:?}", input);
    }
}

#[tokio::test]
async fn test_empty_input_message() {
    let error = scanner(ScriptedFetcher::new()).scan("  ").await.unwrap_err();
    assert_eq!(error.message, "Domain is required");
}

#[tokio::test]
async fn test_healthy_site_scores_full_marks() {
    let scanner = scanner(healthy_site());

    let report = scanner.scan("example.com").await.unwrap();

    assert_eq!(report.domain, "example.com");
    assert_eq!(report.requested_url, "https://example.com/");
    assert_eq!(report.base_url, "https://example.com");
    assert_eq!(report.metrics.len(), REGISTRY.len());

    for metric in &report.metrics {
        assert_eq!(metric.score, 100, "{}: {:?}", metric.name, metric.issues);
        assert_eq!(metric.status, MetricStatus::Pass, "{}", metric.name);
    }
    assert_eq!(report.overall_score, 100);
}

#[tokio::test]
async fn test_metrics_follow_registry_order() {
    let report = scanner(healthy_site()).scan("example.com").await.unwrap();

    let names: Vec<&str> = report.metrics.iter().map(|m| m.name).collect();
    assert_eq!(
        names,
        vec![
            "Title Tag",
            "Meta Description",
            "Heading Structure",
            "Image Alt Text",
            "Internal Links",
            "Meta Keywords",
            "Canonical URL",
            "Meta Robots",
            "Mobile Viewport",
            "Language Declaration",
            "Open Graph Tags",
            "Twitter Cards",
            "Schema Markup",
            "Robots.txt",
            "XML Sitemap",
            "SSL/HTTPS",
            "Page Speed",
            "Content Length",
            "External Links",
            "Favicon",
            "Analytics Tracking",
        ]
    );
}

#[tokio::test]
async fn test_bare_page_overall_score_is_mean() {
    let fetcher = ScriptedFetcher::new().page("https://example.com/", 200, BARE_PAGE);

    let report = scanner(fetcher).scan("example.com").await.unwrap();

    assert_eq!(report.overall_score, aggregate(&report.metrics));
    assert!(report.overall_score < 60);
    assert_eq!(report.band(), "Poor");

    let robots = &report.metrics[13];
    assert_eq!(robots.score, 60);
    assert_eq!(robots.issues, vec!["robots.txt file not found"]);

    let sitemap = &report.metrics[14];
    assert_eq!(sitemap.score, 40);
    assert_eq!(sitemap.status, MetricStatus::Fail);
}

#[tokio::test]
async fn test_sitemap_probe_stops_at_first_hit() {
    let fetcher = ScriptedFetcher::new()
        .page("https://example.com/", 200, BARE_PAGE)
        .page(
            "https://example.com/sitemap_index.xml",
            200,
            "<sitemapindex><sitemap><loc>https://example.com/a.xml</loc></sitemap></sitemapindex>",
        );
    let scanner = scanner(fetcher);

    let report = scanner.scan("example.com").await.unwrap();

    let sitemap = &report.metrics[14];
    assert_eq!(sitemap.score, 100);
    assert_eq!(sitemap.value, "Found: /sitemap_index.xml");

    let requests = scanner.fetcher().requests();
    assert!(requests.contains(&"https://example.com/sitemap.xml".to_string()));
    assert!(!requests.contains(&"https://example.com/sitemaps.xml".to_string()));
    assert!(!requests.contains(&"https://example.com/sitemap1.xml".to_string()));
}

#[tokio::test]
async fn test_sitemap_requires_xml_markers() {
    let fetcher = ScriptedFetcher::new()
        .page("https://example.com/", 200, BARE_PAGE)
        .page("https://example.com/sitemap.xml", 200, "<html>Soft 404</html>");

    let report = scanner(fetcher).scan("example.com").await.unwrap();

    assert_eq!(report.metrics[14].score, 40);
    assert_eq!(report.metrics[14].value, "Not found");
}

#[tokio::test]
async fn test_not_found_aborts_without_report() {
    let fetcher = ScriptedFetcher::new().page("https://example.com/", 404, "Nope");
    let scanner = scanner(fetcher);

    let error = scanner.scan("example.com").await.unwrap_err();

    assert_eq!(error.category, ErrorCategory::NotFound);
    assert_eq!(error.status_code, 404);
    assert_eq!(error.message, "Website not found. Please check the domain name.");
    assert_eq!(error.domain, "example.com");
    // No auxiliary requests after a failed main page
    assert_eq!(scanner.fetcher().requests(), vec!["https://example.com/"]);
}

#[tokio::test]
async fn test_status_categories() {
    let cases = [
        (403, ErrorCategory::AccessDenied),
        (500, ErrorCategory::ServerError),
        (502, ErrorCategory::ServerError),
        (503, ErrorCategory::ServerError),
        (504, ErrorCategory::Timeout),
        (507, ErrorCategory::ServerError),
        (418, ErrorCategory::Unknown),
    ];

    for (status, category) in cases {
        let fetcher = ScriptedFetcher::new().page("https://example.com/", status, "error");

        let error = scanner(fetcher).scan("example.com").await.unwrap_err();

        assert_eq!(error.category, category, "status {}", status);
        assert_eq!(error.status_code, status);
    }
}

#[tokio::test]
async fn test_unmapped_status_message() {
    let fetcher = ScriptedFetcher::new().page("https://example.com/", 418, "teapot");

    let error = scanner(fetcher).scan("example.com").await.unwrap_err();

    assert_eq!(error.message, "HTTP 418: I'm a teapot");
}

#[tokio::test]
async fn test_redirect_status_is_not_followed_by_scanner() {
    // reqwest follows any 3xx with a Location header and fails past the
    // redirect limit, so only a 3xx without Location arrives here
    let fetcher = ScriptedFetcher::new().page("https://example.com/", 301, "");

    let error = scanner(fetcher).scan("example.com").await.unwrap_err();

    assert_eq!(error.category, ErrorCategory::Unknown);
    assert_eq!(error.status_code, 301);
}

#[tokio::test]
async fn test_whitespace_body_is_empty_content() {
    let fetcher = ScriptedFetcher::new().page("https://example.com/", 200, " \n\t ");

    let error = scanner(fetcher).scan("example.com").await.unwrap_err();

    assert_eq!(error.category, ErrorCategory::ServerError);
    assert_eq!(error.status_code, 422);
    assert_eq!(error.message, "Website returned empty content");
}

#[tokio::test]
async fn test_https_failure_falls_back_to_http() {
    let fetcher = ScriptedFetcher::new()
        .unreachable("https://example.com/")
        .page("http://example.com/", 200, &good_page());
    let scanner = scanner(fetcher);

    let report = scanner.scan("example.com").await.unwrap();

    assert_eq!(report.requested_url, "https://example.com/");
    assert_eq!(report.final_url, "http://example.com/");
    assert_eq!(report.base_url, "http://example.com");

    let ssl = &report.metrics[15];
    assert_eq!(ssl.score, 0);
    assert_eq!(ssl.status, MetricStatus::Fail);

    let requests = scanner.fetcher().requests();
    assert_eq!(requests[0], "https://example.com/");
    assert_eq!(requests[1], "http://example.com/");
    assert_eq!(requests[2], "http://example.com/robots.txt");
}

#[tokio::test]
async fn test_both_protocols_failing_is_network_error() {
    let fetcher = ScriptedFetcher::new()
        .timeout("https://example.com/")
        .unreachable("http://example.com/");

    let error = scanner(fetcher).scan("example.com").await.unwrap_err();

    assert_eq!(error.category, ErrorCategory::Network);
    assert_eq!(error.status_code, 503);
    assert!(error.message.starts_with("Unable to connect to website:"));
    // The first failure is the one reported
    assert!(error.message.contains("Request timeout for https://example.com/"));
}

#[tokio::test]
async fn test_default_timeouts_per_request() {
    let fetcher = ScriptedFetcher::new()
        .unreachable("https://example.com/")
        .page("http://example.com/", 200, BARE_PAGE);
    let scanner = scanner(fetcher);

    scanner.scan("example.com").await.unwrap();

    let page = Duration::from_secs(15);
    let auxiliary = Duration::from_secs(5);
    assert_eq!(
        scanner.fetcher().timed_requests(),
        vec![
            ("https://example.com/".to_string(), page),
            ("http://example.com/".to_string(), page),
            ("http://example.com/robots.txt".to_string(), auxiliary),
            ("http://example.com/sitemap.xml".to_string(), auxiliary),
            ("http://example.com/sitemap_index.xml".to_string(), auxiliary),
            ("http://example.com/sitemaps.xml".to_string(), auxiliary),
            ("http://example.com/sitemap1.xml".to_string(), auxiliary),
        ]
    );
}

#[tokio::test]
async fn test_timeouts_come_from_config() {
    let config = HttpConfig {
        page_timeout_secs: 30,
        auxiliary_timeout_secs: 2,
        ..HttpConfig::default()
    };
    let scanner = Scanner::new(healthy_site(), &config);

    scanner.scan("example.com").await.unwrap();

    let requests = scanner.fetcher().timed_requests();
    assert_eq!(
        requests[0],
        ("https://example.com/".to_string(), Duration::from_secs(30))
    );
    for (url, timeout) in &requests[1..] {
        assert_eq!(*timeout, Duration::from_secs(2), "{}", url);
    }
    assert_eq!(requests[1].0, "https://example.com/robots.txt");
    assert_eq!(requests[2].0, "https://example.com/sitemap.xml");
}

#[tokio::test]
async fn test_explicit_http_is_not_retried() {
    let fetcher = ScriptedFetcher::new().unreachable("http://example.com/");
    let scanner = scanner(fetcher);

    let error = scanner.scan("http://example.com").await.unwrap_err();

    assert_eq!(error.category, ErrorCategory::Network);
    assert_eq!(scanner.fetcher().requests(), vec!["http://example.com/"]);
}

#[tokio::test]
async fn test_base_url_follows_redirects() {
    let fetcher = ScriptedFetcher::new()
        .redirect(
            "https://example.com/",
            "https://www.example.com/welcome?ref=1",
            200,
            BARE_PAGE,
        )
        .page("https://www.example.com/robots.txt", 200, ROBOTS_TXT);
    let scanner = scanner(fetcher);

    let report = scanner.scan("example.com").await.unwrap();

    assert_eq!(report.base_url, "https://www.example.com");
    assert_eq!(report.final_url, "https://www.example.com/welcome?ref=1");
    assert_eq!(report.metrics[13].score, 100);

    let requests = scanner.fetcher().requests();
    assert_eq!(requests[1], "https://www.example.com/robots.txt");
    assert_eq!(requests[2], "https://www.example.com/sitemap.xml");
}

#[tokio::test]
async fn test_auxiliary_failures_only_degrade_their_metrics() {
    let fetcher = ScriptedFetcher::new()
        .page("https://example.com/", 200, &good_page())
        .timeout("https://example.com/robots.txt")
        .timeout("https://example.com/sitemap.xml")
        .unreachable("https://example.com/sitemap_index.xml");

    let report = scanner(fetcher).scan("example.com").await.unwrap();

    assert_eq!(report.metrics[13].issues, vec!["Unable to fetch robots.txt"]);
    assert_eq!(report.metrics[13].value, "Not found");
    assert_eq!(report.metrics[14].score, 40);
    assert_eq!(report.metrics[0].score, 100);
}

#[tokio::test]
async fn test_scans_are_deterministic() {
    let scanner = scanner(healthy_site());

    let first = scanner.scan("example.com").await.unwrap();
    let second = scanner.scan("  example.com  ").await.unwrap();

    assert_eq!(first.metrics, second.metrics);
    assert_eq!(first.overall_score, second.overall_score);
    assert_eq!(second.domain, "example.com");
}
