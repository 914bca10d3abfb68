use httpmock::prelude::*;
use serde_json::json;
use skyluxe_client::{
    config::{ApiConfig, SearchDefaults},
    display::{EMPTY_STATE, render_detail, render_results},
    http::{Client, StatusError},
    session::{SEARCH_FAILED_ALERT, SearchSession, Status},
};
use skyluxe_model::{Error as ApiError, ErrorCode, search::SearchQuery};

fn client(server: &MockServer) -> Client {
    Client::new(&ApiConfig {
        endpoint: server.base_url(),
    })
    .unwrap()
}

#[tokio::test]
async fn test_search_and_breakdown() {
    let server = MockServer::start_async().await;

    let gateway = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/search-flight")
                .query_param("origin", "DEL")
                .query_param("destination", "DXB")
                .query_param("date", "2026-06-25");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([{
                    "id": "off_0001",
                    "owner": { "name": "Emirates" },
                    "total_amount": "100.00",
                    "total_currency": "USD"
                }]));
        })
        .await;

    let mut session = SearchSession::new(&SearchDefaults::default());
    session.search(&client(&server)).await;

    gateway.assert_async().await;
    assert_eq!(session.status(), Status::Results);
    assert_eq!(
        render_results(&session),
        "1. Emirates  $110.00  DEL ➔ DXB\n"
    );

    assert!(session.select(0));
    let detail = render_detail(&session.detail().unwrap());
    assert!(detail.contains("$100.00"));
    assert!(detail.contains("+$10.00"));
    assert!(detail.contains("$110.00"));
}

#[tokio::test]
async fn test_no_offers_shows_empty_state() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/search-flight");
            then.status(200).json_body(json!([]));
        })
        .await;

    let mut session = SearchSession::new(&SearchDefaults::default());
    session.search(&client(&server)).await;

    assert_eq!(session.status(), Status::Results);
    assert_eq!(session.alert(), None);
    assert_eq!(render_results(&session), format!("{}\n", EMPTY_STATE));
}

#[tokio::test]
async fn test_gateway_error_body() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/search-flight");
            then.status(500).json_body(json!({
                "error": "missing credentials: `DUFFEL_TOKEN` is not set",
                "code": 5001
            }));
        })
        .await;

    let err = client(&server)
        .search_flights(SearchQuery::new("DEL", "DXB", "2026-06-25"))
        .await
        .unwrap_err();

    let err = err.downcast_ref::<ApiError>().unwrap();
    assert_eq!(err.code, ErrorCode::MissingCredentials);
    assert!(err.message.contains("DUFFEL_TOKEN"));
}

#[tokio::test]
async fn test_gateway_error_without_body() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/search-flight");
            then.status(503).body("Service Unavailable");
        })
        .await;

    let err = client(&server)
        .search_flights(SearchQuery::new("DEL", "DXB", "2026-06-25"))
        .await
        .unwrap_err();

    assert_eq!(err.downcast_ref::<StatusError>().unwrap().0.as_u16(), 503);
}

#[tokio::test]
async fn test_failures_collapse_into_one_alert() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/search-flight");
            then.status(200).body("not json");
        })
        .await;

    let mut session = SearchSession::new(&SearchDefaults::default());
    session.search(&client(&server)).await;

    assert_eq!(session.status(), Status::Failed);
    assert_eq!(session.alert(), Some(SEARCH_FAILED_ALERT));
    assert!(session.offers().is_empty());
}

#[tokio::test]
async fn test_unreachable_gateway() {
    let client = Client::new(&ApiConfig {
        // nothing listens on the discard port
        endpoint: "http://127.0.0.1:9".to_owned(),
    })
    .unwrap();

    let mut session = SearchSession::new(&SearchDefaults::default());
    session.search(&client).await;

    assert_eq!(session.status(), Status::Failed);
    assert_eq!(session.alert(), Some(SEARCH_FAILED_ALERT));
}

#[tokio::test]
async fn test_overlapping_searches() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/search-flight")
                .query_param("destination", "DXB");
            then.status(200)
                .json_body(json!([{ "owner": { "name": "Emirates" }, "total_amount": "100.00" }]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/search-flight")
                .query_param("destination", "LHR");
            then.status(200)
                .json_body(json!([{ "owner": { "name": "British Airways" }, "total_amount": "300.00" }]));
        })
        .await;

    let client = client(&server);
    let mut session = SearchSession::new(&SearchDefaults::default());

    let first = session.begin_search();
    session.set_destination("LHR");
    let second = session.begin_search();

    let (first_result, second_result) = tokio::join!(
        client.search_flights(first.query().clone()),
        client.search_flights(second.query().clone()),
    );

    session.finish_search(second, second_result);
    session.finish_search(first, first_result);

    assert_eq!(session.status(), Status::Results);
    assert_eq!(
        render_results(&session),
        "1. Emirates  $110.00  DEL ➔ DXB\n"
    );
}
