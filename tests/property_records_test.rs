//! OpenPVD client tests against a mock Socrata endpoint

use pvd_fair_rent::{
    ErrorCode, LandlordCache, LandlordResolver, OpenPvdClient, PropertyRecordsSource, Provenance,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DATASET_PATH: &str = "/resource/k6gu-363f.json";

fn client(server: &MockServer, timeout: Duration) -> OpenPvdClient {
    OpenPvdClient::new(format!("{}{}", server.uri(), DATASET_PATH), timeout).unwrap()
}

#[tokio::test]
async fn test_lookup_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(DATASET_PATH))
        .and(query_param("$where", "upper(address) like '%9 BENEFIT ST%'"))
        .and(query_param("$limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "owner_name": "Benefit Street Holdings LLC", "year_built": "1890", "address": "9 BENEFIT ST" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let record = client(&server, Duration::from_secs(5))
        .lookup(" 9 Benefit St ")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(record.owner_name, "Benefit Street Holdings LLC");
    assert!(record.is_llc);
    assert_eq!(record.year_built, Some(1890));
    assert_eq!(record.total_properties, Some(1));
    assert_eq!(record.recent_permits, Some(0));
    assert_eq!(record.source, Provenance::Live);
}

#[tokio::test]
async fn test_lookup_missing_fields_use_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(DATASET_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "address": "1 X ST" }])))
        .mount(&server)
        .await;

    let record = client(&server, Duration::from_secs(5))
        .lookup("1 X St")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(record.owner_name, "Unknown");
    assert!(!record.is_llc);
    assert_eq!(record.year_built, None);
}

#[tokio::test]
async fn test_lookup_empty_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(DATASET_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let result = client(&server, Duration::from_secs(5)).lookup("1 Nowhere Rd").await;
    assert!(result.unwrap().is_none());
}

#[tokio::test]
async fn test_lookup_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client(&server, Duration::from_secs(5))
        .lookup("9 Benefit St")
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::UpstreamUnavailable);
}

#[tokio::test]
async fn test_lookup_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let err = client(&server, Duration::from_millis(200))
        .lookup("9 Benefit St")
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::UpstreamTimeout);
}

#[tokio::test]
async fn test_lookup_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client(&server, Duration::from_secs(5))
        .lookup("9 Benefit St")
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::UpstreamInvalidResponse);
}

#[tokio::test]
async fn test_resolver_degrades_when_upstream_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let resolver = LandlordResolver::new(
        Arc::new(LandlordCache::new()),
        Arc::new(client(&server, Duration::from_secs(5))),
    );
    let record = resolver.resolve("9 Benefit St").await;

    assert_eq!(record.source, Provenance::NotFound);
    assert_eq!(record.owner_name, "Not found in public records");
    assert!(record.score.is_none());
}

#[tokio::test]
async fn test_resolver_prefers_cache_over_upstream() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let cache = LandlordCache::from_json_str(
        r#"{"45 PROSPECT": {"owner_name": "Margaret Chen", "score": 92, "grade": "A"}}"#,
    )
    .unwrap();
    let resolver = LandlordResolver::new(
        Arc::new(cache),
        Arc::new(client(&server, Duration::from_secs(5))),
    );
    let record = resolver.resolve("45 Prospect St").await;

    assert_eq!(record.source, Provenance::Cached);
    assert_eq!(record.owner_name, "Margaret Chen");
}
