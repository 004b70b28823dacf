use super::*;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SUCCESS_BODY: &str = r#"{
    "copyright": "Copyright (c) 2017 The Example Times",
    "response": {
        "docs": [
            {
                "headline": {"main": "First headline"},
                "byline": {"original": "By Jane Doe"},
                "pub_date": "2017-10-01T00:05:20+0000",
                "web_url": "https://www.example.com/2017/10/01/first.html"
            },
            {
                "headline": {"main": "Second headline"},
                "pub_date": "2017-10-03T12:00:00+0000"
            }
        ]
    }
}"#;

const FAULT_BODY: &str = r#"{"fault": {"faultstring": "Invalid ApiKey"}}"#;

fn test_config(endpoint: &str) -> Config {
    let mut config = Config::new("test-key");
    config.endpoint = endpoint.parse().expect("mock server URI should parse");
    config
}

async fn mock_fetcher(server: &MockServer) -> ArchiveFetcher {
    ArchiveFetcher::new(test_config(&server.uri())).expect("failed to create fetcher")
}

#[tokio::test]
async fn fetch_month_returns_documents_for_a_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2017/10.json"))
        .and(query_param("api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SUCCESS_BODY, "application/json"))
        .mount(&server)
        .await;

    let fetcher = mock_fetcher(&server).await;
    let docs = fetcher
        .fetch_month(MonthInfo::new(2017, 10))
        .await
        .expect("fetch should succeed");

    assert_eq!(docs.len(), 2);
    assert_eq!(
        docs[0].headline.as_ref().map(|h| h.main.as_str()),
        Some("First headline")
    );
    assert_eq!(
        docs[1].headline.as_ref().map(|h| h.main.as_str()),
        Some("Second headline")
    );
}

#[tokio::test]
async fn fetch_month_requests_the_unpadded_month_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1852/1.json"))
        .and(query_param("api-key", "test-key"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"copyright": "c", "response": {"docs": []}}"#, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = mock_fetcher(&server).await;
    let docs = fetcher
        .fetch_month(MonthInfo::new(1852, 1))
        .await
        .expect("fetch should succeed");
    assert!(docs.is_empty());
}

#[tokio::test]
async fn fetch_month_surfaces_the_remote_faultstring() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(FAULT_BODY, "application/json"))
        .mount(&server)
        .await;

    let fetcher = mock_fetcher(&server).await;
    let err = fetcher
        .fetch_month(MonthInfo::new(2017, 10))
        .await
        .expect_err("fault body should fail the fetch");

    match err {
        Error::RemoteFault(message) => assert_eq!(message, "Invalid ApiKey"),
        other => panic!("expected RemoteFault, got {other:?}"),
    }
}

#[tokio::test]
async fn non_success_status_is_a_transport_failure_without_parsing() {
    let server = MockServer::start().await;
    // the body is a valid fault shape; the status alone must fail the fetch
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_raw(FAULT_BODY, "application/json"))
        .mount(&server)
        .await;

    let fetcher = mock_fetcher(&server).await;
    let err = fetcher
        .fetch_month(MonthInfo::new(2017, 10))
        .await
        .expect_err("HTTP 500 should fail the fetch");

    match err {
        Error::Transport(message) => assert!(message.contains("500"), "got: {message}"),
        other => panic!("expected Transport, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_server_is_a_transport_failure() {
    // bind-and-drop to get a port with nothing listening
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind");
        listener.local_addr().expect("no local addr").port()
    };

    let fetcher = ArchiveFetcher::new(test_config(&format!("http://127.0.0.1:{port}")))
        .expect("failed to create fetcher");
    let err = fetcher
        .fetch_month(MonthInfo::new(2017, 10))
        .await
        .expect_err("refused connection should fail the fetch");

    assert!(matches!(err, Error::Transport(_)));
}

#[tokio::test]
async fn malformed_body_is_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>nope</html>", "text/html"))
        .mount(&server)
        .await;

    let fetcher = mock_fetcher(&server).await;
    let err = fetcher
        .fetch_month(MonthInfo::new(2017, 10))
        .await
        .expect_err("malformed body should fail the fetch");

    match err {
        Error::Decode(message) => assert!(!message.is_empty()),
        other => panic!("expected Decode, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_month_latest_returns_some_when_uncontested() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SUCCESS_BODY, "application/json"))
        .mount(&server)
        .await;

    let fetcher = mock_fetcher(&server).await;
    let outcome = fetcher
        .fetch_month_latest(MonthInfo::new(2017, 10))
        .await
        .expect("sole in-flight fetch must not be discarded");
    assert_eq!(outcome.expect("fetch should succeed").len(), 2);
}

#[tokio::test]
async fn fetch_month_latest_discards_a_superseded_outcome() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2017/9.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(SUCCESS_BODY, "application/json")
                .set_delay(Duration::from_millis(250)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/2017/10.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SUCCESS_BODY, "application/json"))
        .mount(&server)
        .await;

    let fetcher = Arc::new(mock_fetcher(&server).await);

    let slow = {
        let fetcher = Arc::clone(&fetcher);
        tokio::spawn(async move { fetcher.fetch_month_latest(MonthInfo::new(2017, 9)).await })
    };
    // let the slow fetch reach its await before superseding it
    tokio::time::sleep(Duration::from_millis(50)).await;

    let fast = fetcher.fetch_month_latest(MonthInfo::new(2017, 10)).await;
    assert!(fast.is_some(), "newest fetch must win");

    let stale = slow.await.expect("task panicked");
    assert!(stale.is_none(), "superseded fetch must be discarded");
}

#[tokio::test]
async fn fetching_through_the_archive_source_trait_works() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SUCCESS_BODY, "application/json"))
        .mount(&server)
        .await;

    let source: Arc<dyn ArchiveSource> = Arc::new(mock_fetcher(&server).await);
    let docs = source
        .fetch_month(MonthInfo::new(2017, 10))
        .await
        .expect("fetch should succeed");
    assert_eq!(docs.len(), 2);
}

#[test]
fn new_rejects_an_empty_api_key_at_startup() {
    let err = ArchiveFetcher::new(Config::default()).expect_err("empty key must fail startup");
    assert!(matches!(err, Error::Config { key: Some(ref k), .. } if k == "api_key"));
}
