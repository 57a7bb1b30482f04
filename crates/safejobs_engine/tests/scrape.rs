use std::sync::Arc;

use pretty_assertions::assert_eq;
use safejobs_engine::{
    decode_page, Extractor, FetchSettings, HeadingExtractor, ReqwestFetcher, SafeStateScraper,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE: &str = r#"
<html><head><title>Safest states</title></head>
<body>
  <h2>Ranking</h2>
  <h3> Vermont </h3>
  <p>Low crime.</p>
  <h3>Maine</h3>
  <h3>   </h3>
  <h3><a href="/nh">New <em>Hampshire</em></a></h3>
  <h3>Sign up for our newsletter</h3>
</body></html>
"#;

fn scraper_for(server: &MockServer, route: &str) -> SafeStateScraper {
    SafeStateScraper::new(
        Arc::new(ReqwestFetcher::new(FetchSettings::default())),
        format!("{}{}", server.uri(), route),
    )
}

#[test]
fn headings_are_trimmed_in_document_order() {
    let headings = HeadingExtractor::default().extract(PAGE);
    assert_eq!(
        headings,
        vec![
            "Vermont",
            "Maine",
            "New Hampshire",
            "Sign up for our newsletter"
        ]
    );
}

#[test]
fn extractor_can_target_other_tags() {
    let headings = HeadingExtractor::new("h2").extract(PAGE);
    assert_eq!(headings, vec!["Ranking"]);
}

#[test]
fn decode_respects_charset_header() {
    let bytes = b"<h3>Qu\xe9bec</h3>";
    let decoded = decode_page(bytes, Some("text/html; charset=ISO-8859-1"));
    assert_eq!(decoded.html, "<h3>Québec</h3>");
}

#[test]
fn decode_handles_utf8_bom() {
    let decoded = decode_page(b"\xEF\xBB\xBF<h3>Ohio</h3>", Some("text/html"));
    assert_eq!(decoded.html, "<h3>Ohio</h3>");
    assert!(!decoded.had_errors);
    assert_eq!(decoded.encoding_label, "UTF-8");
}

#[test]
fn decode_replaces_invalid_bytes() {
    let decoded = decode_page(b"<h3>Maine</h3><p>caf\xE9</p>", Some("text/html; charset=utf-8"));
    assert!(decoded.had_errors);
    assert_eq!(decoded.html, "<h3>Maine</h3><p>caf\u{FFFD}</p>");
}

#[tokio::test]
async fn scrape_keeps_headings_when_page_has_stray_bytes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latin"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            b"<h3>Vermont</h3><h3>Maine</h3><p>caf\xE9</p>".to_vec(),
            "text/html; charset=utf-8",
        ))
        .mount(&server)
        .await;

    let scraper = scraper_for(&server, "/latin");
    assert_eq!(scraper.try_scrape().await.unwrap(), vec!["Vermont", "Maine"]);
    assert_eq!(scraper.scrape().await.entries(), ["Vermont", "Maine"]);
}

#[tokio::test]
async fn scrape_returns_headings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/safest"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PAGE, "text/html; charset=utf-8"))
        .mount(&server)
        .await;

    let list = scraper_for(&server, "/safest").scrape().await;
    assert_eq!(list.len(), 4);
    assert_eq!(list.entries()[0], "Vermont");
}

#[tokio::test]
async fn scrape_failure_yields_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let scraper = scraper_for(&server, "/gone");
    assert!(scraper.try_scrape().await.is_err());
    assert!(scraper.scrape().await.is_empty());
}

#[tokio::test]
async fn unreachable_host_yields_empty_list() {
    let scraper = SafeStateScraper::new(
        Arc::new(ReqwestFetcher::new(FetchSettings::default())),
        "http://127.0.0.1:9/unreachable",
    );
    assert!(scraper.scrape().await.is_empty());
}
