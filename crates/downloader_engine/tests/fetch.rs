use std::time::Duration;

use downloader_engine::{FailureKind, FetchError, FetchSettings, PageFetcher, ReqwestPageFetcher};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// The blocking client must live entirely on a blocking worker.
async fn fetch_blocking(settings: FetchSettings, url: String) -> Result<Vec<u8>, FetchError> {
    tokio::task::spawn_blocking(move || {
        let fetcher = ReqwestPageFetcher::new(settings).expect("client");
        fetcher.fetch(&url).map(|body| body.to_vec())
    })
    .await
    .expect("join")
}

#[tokio::test(flavor = "multi_thread")]
async fn fetcher_returns_exact_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/doc"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<html>ok</html>", "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let url = format!("{}/doc", server.uri());
    let body = fetch_blocking(FetchSettings::default(), url).await.unwrap();
    assert_eq!(body, b"<html>ok</html>");
}

#[tokio::test(flavor = "multi_thread")]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = format!("{}/missing", server.uri());
    let err = fetch_blocking(FetchSettings::default(), url.clone())
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
    assert_eq!(err.url, url);
}

#[tokio::test(flavor = "multi_thread")]
async fn fetcher_rejects_malformed_url() {
    let err = fetch_blocking(FetchSettings::default(), "not a url".to_string())
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}

#[tokio::test(flavor = "multi_thread")]
async fn fetcher_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("slow"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Some(Duration::from_millis(50)),
        ..FetchSettings::default()
    };
    let url = format!("{}/slow", server.uri());
    let err = fetch_blocking(settings, url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test(flavor = "multi_thread")]
async fn fetcher_does_not_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/flaky", server.uri());
    let err = fetch_blocking(FetchSettings::default(), url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(503));
}
