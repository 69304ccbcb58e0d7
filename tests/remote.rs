use std::time::Duration;

use fetch::{FetchContext, RetryPolicy, Source};
use grader::{report, Checks, Error};
use url::Url;

mod support;
use support::{EXPECTED, HTML};

fn context(policy: RetryPolicy) -> FetchContext {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    FetchContext::new(client, policy)
}

fn checks() -> Checks {
    Checks::new(["p", "nonexistent-tag", "h1"])
}

fn source(server_url: &str) -> Source {
    Source::Url(Url::parse(&format!("{server_url}/index.html")).unwrap())
}

#[tokio::test]
async fn grades_fetched_document() {
    let mut server = mockito::Server::new_async().await;
    let page = server
        .mock("GET", "/index.html")
        .with_body(HTML)
        .expect(1)
        .create_async()
        .await;
    let cx = context(RetryPolicy::none());
    let r = grader::run(&cx, &checks(), &source(&server.url())).await.unwrap();
    assert_eq!(report::to_json(&r).unwrap(), EXPECTED);
    page.assert_async().await;
}

#[tokio::test]
async fn recovers_with_one_retry() {
    let mut server = mockito::Server::new_async().await;
    let bad = server
        .mock("GET", "/index.html")
        .with_status(502)
        .expect(1)
        .create_async()
        .await;
    let good = server
        .mock("GET", "/index.html")
        .with_body(HTML)
        .expect(1)
        .create_async()
        .await;
    let cx = context(RetryPolicy::new(1, Duration::from_millis(10)));
    let r = grader::run(&cx, &checks(), &source(&server.url())).await.unwrap();
    assert_eq!(report::to_json(&r).unwrap(), EXPECTED);
    bad.assert_async().await;
    good.assert_async().await;
}

#[tokio::test]
async fn exhausted_retry_is_an_error() {
    let mut server = mockito::Server::new_async().await;
    let boom = server
        .mock("GET", "/index.html")
        .with_status(500)
        .expect(2)
        .create_async()
        .await;
    let cx = context(RetryPolicy::new(1, Duration::from_millis(10)));
    let err = grader::run(&cx, &checks(), &source(&server.url())).await.unwrap_err();
    assert!(matches!(err, Error::Fetch(_)), "{err}");
    boom.assert_async().await;
}

#[test]
fn blocking_wrapper_waits_for_fetch() {
    let mut server = mockito::Server::new();
    let page = server.mock("GET", "/index.html").with_body(HTML).expect(1).create();
    let cx = context(RetryPolicy::none());
    let r = grader::run_blocking(&cx, &checks(), &source(&server.url())).unwrap();
    assert_eq!(r.len(), 3);
    assert_eq!(r.get("h1"), Some(true));
    page.assert();
}
