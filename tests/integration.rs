extern crate event_listing;
extern crate tokio;

use event_listing::{fetch_json, FetchError};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn posts_server(response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(response)
        .expect(1)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn fetches_and_decodes_json() {
    let posts = json!([{"id": 1, "title": "hello"}, {"id": 2, "title": "world"}]);
    let server = posts_server(ResponseTemplate::new(200).set_body_json(posts.clone())).await;
    let client = reqwest::Client::new();

    let data = fetch_json(&client, &format!("{}/posts", server.uri()))
        .await
        .unwrap();

    assert_eq!(data, posts);
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = posts_server(ResponseTemplate::new(500)).await;
    let client = reqwest::Client::new();

    match fetch_json(&client, &format!("{}/posts", server.uri())).await {
        Err(FetchError::Status(status)) => assert_eq!(status.as_u16(), 500),
        other => panic!("expected a status error, got {:?}", other),
    }
}

#[tokio::test]
async fn invalid_json_is_a_request_error() {
    let server = posts_server(ResponseTemplate::new(200).set_body_string("not json")).await;
    let client = reqwest::Client::new();

    assert!(matches!(
        fetch_json(&client, &format!("{}/posts", server.uri())).await,
        Err(FetchError::Request(_))
    ));
}

#[tokio::test]
async fn unreachable_host_is_a_request_error() {
    // mock servers are pooled and keep listening after drop, so take a
    // free port from a listener that is closed straight away
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/posts", listener.local_addr().unwrap());
    drop(listener);

    let client = reqwest::Client::new();
    let result = fetch_json(&client, &url).await;

    assert!(matches!(result, Err(FetchError::Request(_))));
}
