//! Integration tests for batched ESummary fetching using mocked HTTP responses

mod common;

use common::{create_mock_client, forbid_endpoint, mount_json};
use pubmed_fetcher::FetchError;
use tracing_test::traced_test;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[tokio::test]
#[traced_test]
async fn test_fetch_details_single_batched_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esummary.fcgi"))
        .and(query_param("db", "pubmed"))
        .and(query_param("id", "31978945,33515491"))
        .and(query_param("retmode", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"result":{"uids":["31978945","33515491"],
                "31978945":{"uid":"31978945","title":"Article One","pubdate":"2020 Feb","authors":[{"name":"Zhu N","authtype":"Author"}]},
                "33515491":{"uid":"33515491","title":"Article Two","pubdate":"2021 Jan","authors":[{"name":"Smith J","affiliation":"Moderna Inc"}]}}}"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let records = client
        .fetch_details(&ids(&["31978945", "33515491"]))
        .await
        .expect("detail fetch should succeed");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title.as_deref(), Some("Article One"));
    assert_eq!(records[1].title.as_deref(), Some("Article Two"));
    assert_eq!(records[1].authors[0].affiliation, "Moderna Inc");
}

#[tokio::test]
#[traced_test]
async fn test_fetch_details_empty_input_makes_no_request() {
    let mock_server = MockServer::start().await;
    forbid_endpoint(&mock_server, "/esummary.fcgi").await;

    let client = create_mock_client(&mock_server);
    let records = client.fetch_details(&[]).await.unwrap();

    assert!(records.is_empty());
}

#[tokio::test]
#[traced_test]
async fn test_fetch_details_drops_missing_ids_and_keeps_order() {
    let mock_server = MockServer::start().await;
    mount_json(
        &mock_server,
        "/esummary.fcgi",
        200,
        r#"{"result":{"uids":["5","3"],"5":{"uid":"5","title":"Five"},"3":{"uid":"3","title":"Three"}}}"#,
    )
    .await;

    let client = create_mock_client(&mock_server);
    let records = client.fetch_details(&ids(&["3", "4", "5"])).await.unwrap();

    let found: Vec<&str> = records.iter().filter_map(|r| r.id.as_deref()).collect();
    assert_eq!(found, vec!["3", "5"]);
}

#[tokio::test]
#[traced_test]
async fn test_fetch_details_server_error() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, "/esummary.fcgi", 502, "").await;

    let client = create_mock_client(&mock_server);
    let err = client.fetch_details(&ids(&["1"])).await.unwrap_err();

    assert!(err.is_upstream());
    assert!(matches!(err, FetchError::ApiError { status: 502, .. }));
}

#[tokio::test]
#[traced_test]
async fn test_fetch_details_malformed_body() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, "/esummary.fcgi", 200, "{\"result\": ").await;

    let client = create_mock_client(&mock_server);
    let err = client.fetch_details(&ids(&["1"])).await.unwrap_err();

    assert!(matches!(err, FetchError::JsonError(_)));
}
