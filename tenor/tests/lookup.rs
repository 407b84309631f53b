use serde_json::json;
use tenor::error::Error;
use tenor::models::{ContentFilter, MediaFilter};
use tenor::{Config, StatusCode};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

const BASE_CONFIG: Config = Config::new()
    .content_filter(ContentFilter::High)
    .media_filter(&[MediaFilter::Minimal]);

fn single_gif_body() -> serde_json::Value {
    json!({
        "results": [{
            "id": "16989471141791455574",
            "title": "",
            "itemurl": "https://tenor.com/view/excited-gif-16989471141791455574",
            "url": "https://media.tenor.com/ABC123/excited.gif",
            "media": [{
                "tinygif": {"url": "https://media.tenor.com/tiny/excited.gif"},
                "gif": {"url": "https://media.tenor.com/full/excited.gif"},
                "mp4": {"url": "https://media.tenor.com/video/excited.mp4"}
            }]
        }],
        "next": "1"
    })
}

#[tokio::test]
async fn search_extracts_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/random"))
        .and(query_param("key", common::API_KEY))
        .and(query_param("q", "excited"))
        .respond_with(ResponseTemplate::new(200).set_body_json(single_gif_body()))
        .expect(1)
        .mount(&server)
        .await;

    let gifs = common::client(&server)
        .search("excited", None)
        .await
        .unwrap();

    assert_eq!(gifs.len(), 1);
    assert_eq!(gifs[0].id, "16989471141791455574");
    let formats = &gifs[0].media[0];
    assert_eq!(
        formats[&MediaFilter::TinyGif].url.as_str(),
        "https://media.tenor.com/tiny/excited.gif"
    );
}

#[tokio::test]
async fn search_merges_base_and_call_config() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("key", common::API_KEY))
        .and(query_param("q", "dancing cat"))
        .and(query_param("contentfilter", "high"))
        .and(query_param("media_filter", "minimal"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(single_gif_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client_with_config(&server, BASE_CONFIG);
    client
        .search("dancing cat", Some(Config::new().limit(1)))
        .await
        .unwrap();
}

#[tokio::test]
async fn random_omits_query_and_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/random"))
        .and(query_param("key", common::API_KEY))
        .and(query_param_is_missing("q"))
        .and(query_param_is_missing("limit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(single_gif_body()))
        .expect(1)
        .mount(&server)
        .await;

    common::client(&server).random(None).await.unwrap();
}

#[tokio::test]
async fn empty_results_are_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .mount(&server)
        .await;

    let gifs = common::client(&server).search("zzzz", None).await.unwrap();
    assert!(gifs.is_empty());
}

#[tokio::test]
async fn missing_results_field_parses_as_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let gifs = common::client(&server).search("zzzz", None).await.unwrap();
    assert!(gifs.is_empty());
}

#[tokio::test]
async fn bare_media_entries_parse() {
    let server = MockServer::start().await;
    let body = json!({"results": [{"media": [{"tinygif": {"url": "http://x/y.gif"}}]}]});
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let gifs = common::client(&server).search("excited", None).await.unwrap();
    assert_eq!(gifs.len(), 1);
    assert_eq!(
        gifs[0].media[0][&MediaFilter::TinyGif].url.as_str(),
        "http://x/y.gif"
    );
}

#[tokio::test]
async fn error_status_is_classified() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let error = common::client(&server)
        .search("excited", None)
        .await
        .unwrap_err();

    assert!(matches!(error, Error::Status(..)));
    assert_eq!(error.status(), Some(StatusCode::FORBIDDEN));
}

#[tokio::test]
async fn connection_failure_is_classified() {
    // Nothing listens on the discard port.
    let client =
        tenor::Client::new(common::API_KEY.to_owned()).with_endpoint("http://127.0.0.1:9/v1/random");

    let error = client.search("excited", None).await.unwrap_err();

    assert!(matches!(error, Error::Connection(_)));
    assert_eq!(error.status(), None);
}
