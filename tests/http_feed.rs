//! HttpFeed against a one-shot local listener.

use quakemap::config::Config;
use quakemap::feed::{load_feed, payload_sha256, HttpFeed};
use quakemap::pipeline::run;
use quakemap::surface::LeafletPage;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve exactly one HTTP/1.1 response and return the feed URL.
async fn serve_once(status: &'static str, body: &'static str) -> url::Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut sock, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = sock.read(&mut buf).await;
        let resp = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/geo+json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        sock.write_all(resp.as_bytes()).await.unwrap();
        let _ = sock.shutdown().await;
    });
    url::Url::parse(&format!("http://{}/summary/4.5_month.geojson", addr)).unwrap()
}

/// Bypasses any proxy configured in the environment.
fn local_feed(url: url::Url) -> HttpFeed {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpFeed::with_client(url, client)
}

const ONE_QUAKE: &str = r#"{"type":"FeatureCollection","features":[{"type":"Feature","properties":{"mag":4.5,"url":"https://earthquake.usgs.gov/q"},"geometry":{"type":"Point","coordinates":[-122.4,37.8,5]}}]}"#;

#[tokio::test]
async fn fetches_and_renders_over_http() {
    let url = serve_once("200 OK", ONE_QUAKE).await;
    let cfg = Config {
        feed_url: url.to_string(),
        ..Config::default()
    };
    let source = local_feed(cfg.feed_url().unwrap());
    let mut page = LeafletPage::from_config(&cfg);

    let report = run(&cfg, &source, &mut page).await.unwrap();

    assert_eq!(report.markers, 1);
    assert_eq!(report.feed_sha256, payload_sha256(ONE_QUAKE.as_bytes()));
    assert_eq!(page.circles()[0].center, (37.8, -122.4));
}

#[tokio::test]
async fn server_error_is_fatal() {
    let url = serve_once("500 Internal Server Error", "{}").await;
    let err = load_feed(&local_feed(url)).await.unwrap_err();
    assert!(err.to_string().contains("500"), "unexpected error: {}", err);
}

#[tokio::test]
async fn non_geojson_body_is_fatal() {
    let url = serve_once("200 OK", "<html>maintenance</html>").await;
    let mut page = LeafletPage::from_config(&Config::default());
    let result = run(&Config::default(), &local_feed(url), &mut page).await;
    assert!(result.is_err());
    assert!(page.controls().is_empty());
}

#[tokio::test]
async fn unreachable_host_is_fatal() {
    // Bind then drop to get a port nobody is listening on.
    let addr = TcpListener::bind("127.0.0.1:0").await.unwrap().local_addr().unwrap();
    let url = url::Url::parse(&format!("http://{}/feed.geojson", addr)).unwrap();
    assert!(load_feed(&local_feed(url)).await.is_err());
}
