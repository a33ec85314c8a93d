//! Mock-based resolver tests using wiremock.
//!
//! These tests verify actual lookup behavior by mocking the Europe PMC API.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pubmed_annotator::client::EuropePmcClient;
use pubmed_annotator::config::Config;
use pubmed_annotator::{Error, resolve};

const SEARCH_PATH: &str = "/europepmc/webservices/rest/search";

/// Create a client pointed at a mock server.
fn setup_client(mock_server: &MockServer) -> EuropePmcClient {
    let config = Config::for_testing(&mock_server.uri());
    EuropePmcClient::new(config).unwrap()
}

/// Sample search result JSON wrapping the given article records.
fn search_result(results: Vec<serde_json::Value>) -> serde_json::Value {
    json!({ "resultList": { "result": results } })
}

// =============================================================================
// Full resolution
// =============================================================================

#[tokio::test]
async fn test_resolve_renders_all_three_segments() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("query", "doi:10.1093/bioinformatics/btab069"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_result(vec![
            json!({"pmid": "33471858", "pmcid": "PMC8193806"}),
        ])))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let annotation = resolve(&client, "10.1093/bioinformatics/btab069").await.unwrap();

    assert_eq!(
        annotation.to_string(),
        "[PubMed:\\href{http://www.ncbi.nlm.nih.gov/pubmed/33471858}{33471858}]\
         [PubMed Central:\\href{http://www.ncbi.nlm.nih.gov/pmc/articles/PMC8193806}{PMC8193806}]\
         [doi:\\href{http://dx.doi.org/10.1093/bioinformatics/btab069}{10.1093/bioinformatics/btab069}]"
    );
}

#[tokio::test]
async fn test_resolve_takes_first_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_result(vec![
            json!({"pmid": "111", "pmcid": "PMC111"}),
            json!({"pmid": "222", "pmcid": "PMC222"}),
        ])))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let annotation = resolve(&client, "10.1000/multi").await.unwrap();

    let rendered = annotation.to_string();
    assert!(rendered.contains("{111}"));
    assert!(!rendered.contains("222"));
}

// =============================================================================
// Degraded annotations
// =============================================================================

#[tokio::test]
async fn test_empty_result_list_degrades_to_doi_only() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_result(vec![])))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let annotation = resolve(&client, "10.1000/unknown").await.unwrap();

    assert!(!annotation.has_pmid());
    assert!(!annotation.has_pmcid());
    assert_eq!(
        annotation.to_string(),
        "[doi:\\href{http://dx.doi.org/10.1000/unknown}{10.1000/unknown}]"
    );
}

#[tokio::test]
async fn test_non_200_degrades_to_doi_only() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let annotation = resolve(&client, "10.1000/missing").await.unwrap();

    assert!(!annotation.has_pmid());
    assert!(!annotation.has_pmcid());
    assert_eq!(
        annotation.to_string(),
        "[doi:\\href{http://dx.doi.org/10.1000/missing}{10.1000/missing}]"
    );
}

#[tokio::test]
async fn test_missing_pmid_omits_pubmed_segment() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(search_result(vec![json!({"pmcid": "PMC42"})])),
        )
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let annotation = resolve(&client, "10.1000/pmconly").await.unwrap();

    assert!(!annotation.has_pmid());
    assert!(annotation.has_pmcid());
    let rendered = annotation.to_string();
    assert!(!rendered.contains("[PubMed:"));
    assert!(rendered.contains("[PubMed Central:"));
}

#[tokio::test]
async fn test_missing_pmcid_omits_pmc_segment() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(search_result(vec![json!({"pmid": "33471858"})])),
        )
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let annotation = resolve(&client, "10.1000/pmidonly").await.unwrap();

    assert!(annotation.has_pmid());
    assert!(!annotation.has_pmcid());
    assert!(!annotation.to_string().contains("[PubMed Central:"));
}

#[tokio::test]
async fn test_undecodable_body_is_fatal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let result = resolve(&client, "10.1000/broken").await;

    assert!(matches!(result, Err(Error::Json(_))));
}

// =============================================================================
// Normalization
// =============================================================================

#[tokio::test]
async fn test_resolver_url_is_stripped_before_lookup() {
    let mock_server = MockServer::start().await;

    // The mock only matches the bare DOI; resolving the URL form must hit it.
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("query", "doi:10.1006/jmbi.1994.1017"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_result(vec![
            json!({"pmid": "8182748", "pmcid": "PMC123"}),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let annotation =
        resolve(&client, "https://doi.org/10.1006/jmbi.1994.1017").await.unwrap();

    assert_eq!(annotation.doi(), "10.1006/jmbi.1994.1017");
    assert!(annotation
        .to_string()
        .contains("[doi:\\href{http://dx.doi.org/10.1006/jmbi.1994.1017}{10.1006/jmbi.1994.1017}]"));
}

#[tokio::test]
async fn test_pmcid_path_prefix_is_trimmed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_result(vec![
            json!({"pmid": "1", "pmcid": "articles/PMC1234567"}),
        ])))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let annotation = resolve(&client, "10.1000/prefixed").await.unwrap();

    assert!(annotation.to_string().contains(
        "[PubMed Central:\\href{http://www.ncbi.nlm.nih.gov/pmc/articles/PMC1234567}{PMC1234567}]"
    ));
}
