//! Scenarios against the real service. Run with `--ignored`; set
//! `OPENFIGI_API_KEY` for the higher rate limit.

use figi_client::{
    client::ApiClient,
    config::ClientConfig,
    models::{IdType, Query, QueryResult},
};
use serde_json::Value;
use serial_test::serial;

fn live_client() -> ApiClient {
    ApiClient::new(ClientConfig::from_env()).expect("Failed to create ApiClient")
}

#[test]
#[serial]
#[ignore]
fn search_apple_returns_matches() {
    let body = live_client().search("APPLE").expect("search failed");
    let value: Value = serde_json::from_str(&body).expect("search body is not JSON");
    let data = value["data"].as_array().expect("expected a data array");
    assert!(!data.is_empty());
    assert!(data[0].get("figi").is_some());
    assert!(data[0].get("ticker").is_some());
    assert!(data[0].get("name").is_some());
}

#[test]
#[serial]
#[ignore]
fn mapping_known_isin_returns_a_figi() {
    let results = live_client()
        .map(&[Query::new(IdType::Isin, "US4592001014")])
        .expect("mapping failed");
    assert_eq!(results.len(), 1);
    assert!(results[0].message().is_none(), "unexpected {:?}", results[0]);
    let figi = results[0].records()[0].figi.as_deref().unwrap_or_default();
    assert!(!figi.is_empty());
}

#[test]
#[serial]
#[ignore]
fn mapping_bad_isin_returns_an_error_slot() {
    let results = live_client()
        .map(&[Query::new(IdType::Isin, "NOT_A_REAL_ISIN")])
        .expect("mapping failed");
    assert_eq!(results.len(), 1);
    assert!(
        matches!(&results[0], QueryResult::Error(m) | QueryResult::Warning(m) if !m.is_empty()),
        "unexpected {:?}",
        results[0]
    );
    assert!(results[0].records().is_empty());
}
