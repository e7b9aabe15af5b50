//! Integration tests for the search pipeline.
//!
//! These tests wire the full flow an application would: mock model →
//! searcher → cache over a memory store, and verify the end-to-end
//! behavior rather than any single stage.

use chrono::{Duration, Utc};
use serde_json::json;

use discovery::testing::MockModel;
use discovery::{
    CacheStore, CachedSearch, Domain, MemoryStore, SearchCache, SearchError, SearchResult,
    Searcher,
};

/// A record that passes every validator check.
fn valid_record(name: &str) -> serde_json::Value {
    json!({
        "name": name,
        "description": format!(
            "The {} collection: curated observations with documentation sufficient for reuse.",
            name
        ),
        "url": format!("https://example.org/{}", name),
        "domain": "Research",
        "use_cases": ["exploratory analysis", "benchmarking"],
    })
}

fn response_with(records: Vec<serde_json::Value>) -> String {
    serde_json::Value::Array(records).to_string()
}

fn searcher_returning(records: Vec<serde_json::Value>) -> Searcher<MockModel> {
    Searcher::new(MockModel::new().with_response(response_with(records)))
}

#[tokio::test]
async fn test_search_returns_all_valid_records() {
    let searcher = searcher_returning(vec![valid_record("a"), valid_record("b")]);

    let result = searcher.search("ocean data").await.unwrap();
    assert_eq!(result.query, "ocean data");
    assert_eq!(result.total_count, 2);
    assert_eq!(result.datasets.len(), 2);
}

#[tokio::test]
async fn test_scores_step_down_in_model_order() {
    let records = (0..5).map(|i| valid_record(&format!("d{}", i))).collect();
    let searcher = searcher_returning(records);

    let result = searcher.search("rainfall").await.unwrap();
    let scores: Vec<f32> = result.datasets.iter().map(|d| d.relevance_score).collect();

    for (score, expected) in scores.iter().zip([1.0, 0.9, 0.8, 0.7, 0.6]) {
        assert!((score - expected).abs() < 0.001, "got {scores:?}");
    }
}

#[tokio::test]
async fn test_one_bad_record_is_skipped_not_fatal() {
    let mut bad = valid_record("bad");
    bad["description"] = json!("too short");

    let searcher = searcher_returning(vec![
        valid_record("a"),
        bad,
        valid_record("c"),
        valid_record("d"),
        valid_record("e"),
    ]);

    let result = searcher.search("census").await.unwrap();
    assert_eq!(result.total_count, 4);
    assert!(result.datasets.iter().all(|d| d.name != "bad"));
}

#[tokio::test]
async fn test_skipped_records_still_consume_their_rank() {
    let mut bad = valid_record("bad");
    bad["domain"] = json!("Corporate");

    let searcher = searcher_returning(vec![valid_record("a"), bad, valid_record("c")]);

    let result = searcher.search("traffic").await.unwrap();
    assert_eq!(result.total_count, 2);
    // "c" was third in model order, so it keeps the index-2 score.
    assert!((result.datasets[1].relevance_score - 0.8).abs() < 0.001);
}

#[tokio::test]
async fn test_all_invalid_records_is_an_error() {
    let mut first = valid_record("a");
    first["use_cases"] = json!(["only one"]);
    let mut second = valid_record("b");
    second["domain"] = json!("Corporate");

    let searcher = searcher_returning(vec![first, second]);

    let err = searcher.search("housing").await.unwrap_err();
    assert!(matches!(err, SearchError::NoValidDatasets));
}

#[tokio::test]
async fn test_prose_wrapped_single_quoted_response_is_repaired() {
    let response = "Here are some datasets I found:\n\
        [{'name':'A','description':'Sixty characters of descriptive text about this dataset here.','url':'u','domain':'Academic','use_cases':['a','b']}]\n\
        Let me know if these help!";
    let searcher = Searcher::new(MockModel::new().with_response(response));

    let result = searcher.search("anything").await.unwrap();
    assert_eq!(result.total_count, 1);
    assert_eq!(result.datasets[0].name, "A");
    assert_eq!(result.datasets[0].domain, Domain::Academic);
}

#[tokio::test]
async fn test_response_without_array_is_malformed() {
    let searcher = Searcher::new(MockModel::new().with_response("I found nothing relevant."));

    let err = searcher.search("anything").await.unwrap_err();
    assert!(matches!(err, SearchError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_model_failure_surfaces_as_search_error() {
    let searcher = Searcher::new(MockModel::new().with_failure("503 overloaded"));

    let err = searcher.search("anything").await.unwrap_err();
    assert!(matches!(err, SearchError::Model(_)));
}

#[tokio::test]
async fn test_prompt_carries_the_query() {
    let model = MockModel::new().with_response(response_with(vec![valid_record("a")]));
    let searcher = Searcher::new(model.clone());

    searcher.search("urban heat islands").await.unwrap();

    assert_eq!(model.call_count(), 1);
    assert!(model.prompts()[0].contains("urban heat islands"));
}

#[tokio::test]
async fn test_miss_then_search_then_store_then_hit() {
    let searcher = searcher_returning(vec![valid_record("a")]);
    let cache = SearchCache::new(MemoryStore::new());

    assert!(cache.lookup("glaciers").await.unwrap().is_none());

    let fresh = searcher.search("glaciers").await.unwrap();
    cache.store(&fresh).await.unwrap();

    let hit = cache.lookup("glaciers").await.unwrap().unwrap();
    assert_eq!(hit, fresh);
}

#[tokio::test]
async fn test_failed_search_caches_nothing() {
    let searcher = Searcher::new(MockModel::new().with_response("no array here"));
    let cache = SearchCache::new(MemoryStore::new());

    assert!(searcher.search("doomed").await.is_err());
    // The caller never reached store; the query stays absent.
    assert!(cache.lookup("doomed").await.unwrap().is_none());
    assert!(cache.store_backend().is_empty());
}

#[tokio::test]
async fn test_freshness_window_boundaries() {
    let store = MemoryStore::new();
    let searcher = searcher_returning(vec![valid_record("a")]);

    let fresh_result = searcher.search("within window").await.unwrap();
    store
        .put(&CachedSearch {
            result: fresh_result,
            cached_at: Utc::now() - Duration::hours(23),
        })
        .await
        .unwrap();

    let stale_result = searcher.search("past window").await.unwrap();
    store
        .put(&CachedSearch {
            result: stale_result,
            cached_at: Utc::now() - Duration::hours(25),
        })
        .await
        .unwrap();

    let cache = SearchCache::new(store);
    assert!(cache.lookup("within window").await.unwrap().is_some());
    assert!(cache.lookup("past window").await.unwrap().is_none());
}

#[tokio::test]
async fn test_cached_result_round_trips_through_json() {
    let searcher = searcher_returning(vec![valid_record("a"), valid_record("b")]);
    let result = searcher.search("soil moisture").await.unwrap();

    let json = serde_json::to_string(&result).unwrap();
    let restored: SearchResult = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, result);
    assert_eq!(
        restored.datasets[0].timestamp,
        result.datasets[0].timestamp
    );
}
