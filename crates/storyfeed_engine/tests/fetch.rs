use std::time::Duration;

use pretty_assertions::assert_eq;
use storyfeed_engine::{FailureKind, FetchSettings, ReqwestFetcher, SearchBackend, StoryHit};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SEARCH_BODY: &str = r#"{
    "hits": [
        {
            "objectID": "1",
            "url": "https://reactjs.org/",
            "title": "React",
            "author": "dan",
            "num_comments": 3,
            "points": 4
        },
        {
            "objectID": "2",
            "url": null,
            "title": "Ask HN: who is hiring?",
            "author": "whoishiring",
            "num_comments": null,
            "points": 10
        }
    ]
}"#;

#[tokio::test]
async fn search_decodes_hits_and_tolerates_nulls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/search"))
        .and(query_param("query", "react"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SEARCH_BODY, "application/json"))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let url = format!("{}/api/v1/search?query=react", server.uri());

    let hits = fetcher.search(&url).await.expect("search ok");
    assert_eq!(hits.len(), 2);
    assert_eq!(
        hits[0],
        StoryHit {
            object_id: "1".to_string(),
            url: Some("https://reactjs.org/".to_string()),
            title: Some("React".to_string()),
            author: Some("dan".to_string()),
            num_comments: Some(3),
            points: Some(4),
        }
    );
    // The Ask HN hit carries nulls; they decode instead of failing the batch.
    assert_eq!(hits[1].object_id, "2");
    assert_eq!(hits[1].url, None);
    assert_eq!(hits[1].num_comments, None);
}

#[tokio::test]
async fn search_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let url = format!("{}/missing", server.uri());

    let err = fetcher.search(&url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn search_times_out_on_slow_response() {
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
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings);
    let url = format!("{}/slow", server.uri());

    let err = fetcher.search(&url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn search_fails_on_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<html>not json</html>", "text/html"),
        )
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let url = format!("{}/api/v1/search?query=react", server.uri());

    let err = fetcher.search(&url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedBody);
}

#[tokio::test]
async fn search_rejects_invalid_url() {
    let fetcher = ReqwestFetcher::new(FetchSettings::default());

    let err = fetcher.search("not a url").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
