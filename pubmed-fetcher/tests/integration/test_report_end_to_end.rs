//! End-to-end tests: search, detail fetch and report rows against a mocked API

mod common;

use common::{
    CANCER_ESEARCH_RESPONSE, CANCER_ESUMMARY_RESPONSE, create_mock_client, forbid_endpoint,
    mount_json,
};
use pubmed_fetcher::{ClientConfig, PubMedClient};
use tracing_test::traced_test;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
#[traced_test]
async fn test_cancer_report() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, "/esearch.fcgi", 200, CANCER_ESEARCH_RESPONSE).await;
    mount_json(&mock_server, "/esummary.fcgi", 200, CANCER_ESUMMARY_RESPONSE).await;

    let client = create_mock_client(&mock_server);
    let rows = client.fetch_report("cancer").await.expect("report should build");

    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].pubmed_id, "1");
    assert_eq!(rows[0].title, "T1");
    assert_eq!(rows[0].publication_date, "2020");
    assert_eq!(rows[0].non_academic_authors, "A");
    assert_eq!(rows[0].company_affiliations, "Acme Inc");
    assert_eq!(rows[0].corresponding_author_email, "N/A");

    assert_eq!(rows[1].pubmed_id, "2");
    assert_eq!(rows[1].non_academic_authors, "N/A");
    assert_eq!(rows[1].company_affiliations, "N/A");
}

#[tokio::test]
#[traced_test]
async fn test_report_uses_configured_result_cap() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("retmax", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_string(CANCER_ESEARCH_RESPONSE))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_json(&mock_server, "/esummary.fcgi", 200, CANCER_ESUMMARY_RESPONSE).await;

    let client = PubMedClient::with_config(
        ClientConfig::new()
            .with_base_url(mock_server.uri())
            .with_max_results(7),
    );

    let rows = client.fetch_report("cancer").await.unwrap();
    assert_eq!(rows.len(), 2);
}

#[tokio::test]
#[traced_test]
async fn test_search_failure_skips_detail_fetch() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, "/esearch.fcgi", 500, "").await;
    forbid_endpoint(&mock_server, "/esummary.fcgi").await;

    let client = create_mock_client(&mock_server);
    let result = client.fetch_report("cancer").await;

    assert!(result.unwrap_err().is_upstream());
}

#[tokio::test]
#[traced_test]
async fn test_no_search_results_skips_detail_fetch() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, "/esearch.fcgi", 200, r#"{"esearchresult":{"idlist":[]}}"#).await;
    forbid_endpoint(&mock_server, "/esummary.fcgi").await;

    let client = create_mock_client(&mock_server);
    let rows = client.fetch_report("cancer").await.unwrap();

    assert!(rows.is_empty());
}

#[tokio::test]
#[traced_test]
async fn test_detail_failure_discards_search_results() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, "/esearch.fcgi", 200, CANCER_ESEARCH_RESPONSE).await;
    mount_json(&mock_server, "/esummary.fcgi", 503, "").await;

    let client = create_mock_client(&mock_server);
    let result = client.search_and_fetch_details("cancer", 200).await;

    assert!(result.unwrap_err().is_upstream());
}
