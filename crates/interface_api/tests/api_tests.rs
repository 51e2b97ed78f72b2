//! HTTP API Tests
//!
//! Drives the full router in-process with axum-test. The engine is pinned
//! to 2026-10-16 and mints sequential quote ids from QM-20261016-1000.

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use domain_records::ports::mock::MockQuoteRecordPort;
use domain_records::{QuoteRecordPort, RecordService};
use interface_api::config::ApiConfig;
use interface_api::{create_router, AppState};
use infra_store::mock_records;
use test_utils::{EngineFixtures, RequestFixtures, TempStore};

fn server_over(port: Arc<dyn QuoteRecordPort>) -> TestServer {
    let state = AppState::new(
        EngineFixtures::fixed(),
        RecordService::new(port),
        ApiConfig::default(),
    );
    TestServer::new(create_router(state)).unwrap()
}

fn seeded_server() -> TestServer {
    server_over(Arc::new(MockQuoteRecordPort::with_records(mock_records())))
}

fn sample_body() -> Value {
    serde_json::to_value(RequestFixtures::raw_sample()).unwrap()
}

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_root_reports_ok() {
        let server = seeded_server();

        for path in ["/", "/health"] {
            let response = server.get(path).await;
            response.assert_status_ok();
            let body: Value = response.json();
            assert_eq!(body["status"], "ok");
            assert_eq!(body["service"], "QuoteMaster API");
        }
    }

    #[tokio::test]
    async fn test_readiness_checks_store() {
        let store = TempStore::new();
        let server = server_over(store.seeded_port());

        server.get("/health/ready").await.assert_status_ok();

        store.write_raw("not json");
        let response = server.get("/health/ready").await;
        assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.json::<Value>()["status"], "unhealthy");
    }
}

mod catalog_tests {
    use super::*;

    #[tokio::test]
    async fn test_vehicle_years() {
        let years: Vec<i32> = seeded_server().get("/vehicle-years").await.json();

        assert_eq!(years.len(), 21);
        assert_eq!(years[0], 2026);
        assert_eq!(years[20], 2006);
    }

    #[tokio::test]
    async fn test_option_lists() {
        let server = seeded_server();

        let values: Vec<String> = server.get("/vehicle-value-ranges").await.json();
        assert_eq!(values, vec!["Under $5,000", "$5,000 - $40,000", "Over $40,000"]);

        let frequencies: Vec<String> = server.get("/driving-frequency-options").await.json();
        assert_eq!(frequencies, vec!["Very Little", "Average", "A Lot"]);

        let statuses: Vec<String> = server.get("/marital-statuses").await.json();
        assert_eq!(statuses.len(), 4);
    }

    #[tokio::test]
    async fn test_coverage_explanation_for_level() {
        let response = seeded_server()
            .get("/coverage-explanation")
            .add_query_param("coverage_level", "Basic")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["coverage_level"], "Basic");
        assert_eq!(body["coverages"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_coverage_explanation_all_levels() {
        let body: Value = seeded_server().get("/coverage-explanation").await.json();

        assert_eq!(body["coverage_levels"].as_array().unwrap().len(), 3);
        assert_eq!(body["coverages"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_coverage_explanation_unknown_level() {
        let response = seeded_server()
            .get("/coverage-explanation")
            .add_query_param("coverage_level", "Gold")
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "bad_request");
        assert!(body["message"]
            .as_str()
            .unwrap()
            .contains("Valid options: Basic, Standard, Premium"));
    }

    #[tokio::test]
    async fn test_factor_and_discount_explanations() {
        let server = seeded_server();

        let factors: Vec<Value> = server.get("/pricing-factors").await.json();
        assert_eq!(factors.len(), 8);

        let discounts: Vec<Value> = server.get("/discounts").await.json();
        assert_eq!(discounts.len(), 6);
        assert_eq!(discounts[0]["typical_amount"], 75.0);
    }
}

mod calculate_tests {
    use super::*;

    /// The sample request round-trips through the API to the documented premium
    #[tokio::test]
    async fn test_sample_request_prices() {
        let server = seeded_server();
        let sample: Value = server.get("/sample-quote-request").await.json();
        assert_eq!(sample["vehicle_year"], 2023);

        let response = server.post("/calculate-quote").json(&sample).await;

        response.assert_status_ok();
        let quote: Value = response.json();
        assert_eq!(quote["quote_id"], "QM-20261016-1000");
        assert_eq!(quote["base_premium"], 1200.0);
        assert_eq!(quote["vehicle_factor"], 1.11);
        assert_eq!(quote["total_discounts"], 225.0);
        assert_eq!(quote["final_premium"], 1254.32);
        assert_eq!(quote["expiration_date"], "2026-11-15");
        assert_eq!(quote["coverage_level"], "Standard");
        assert!(quote.get("record").is_none());
        assert!(quote.get("warnings").is_none());
    }

    /// Next year's model prices normally and carries a warning
    #[tokio::test]
    async fn test_next_year_model_returns_warning() {
        let server = seeded_server();
        let mut body = sample_body();
        body["vehicle_year"] = json!(2027);

        let response = server.post("/calculate-quote").json(&body).await;

        response.assert_status_ok();
        let quote: Value = response.json();
        assert_eq!(quote["vehicle_year"], 2027);
        assert_eq!(quote["warnings"], json!(["Vehicle year 2027 is next year's model"]));
    }

    #[tokio::test]
    async fn test_invalid_request_lists_reasons() {
        let mut body = sample_body();
        body["age"] = json!(12);
        body["zip_code"] = json!("ABCDE");

        let response = seeded_server().post("/calculate-quote").json(&body).await;

        assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        let error: Value = response.json();
        assert_eq!(error["error"], "validation_error");
        assert_eq!(
            error["details"],
            json!(["Age must be between 16 and 120", "ZIP code must be a 5-digit number"])
        );
    }

    #[tokio::test]
    async fn test_invalid_contact_email() {
        let mut body = sample_body();
        body["email"] = json!("not-an-email");

        let response = seeded_server().post("/calculate-quote").json(&body).await;

        assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        let error: Value = response.json();
        assert!(error["details"][0].as_str().unwrap().starts_with("email"));
    }

    /// A saved quote becomes a back-office record under its quote id
    #[tokio::test]
    async fn test_save_record() {
        let server = server_over(Arc::new(MockQuoteRecordPort::new()));
        let mut body = sample_body();
        body["customer"] = json!("Ada Byron");
        body["email"] = json!("ada@example.com");
        body["save_record"] = json!(true);

        let quote: Value = server.post("/calculate-quote").json(&body).await.json();
        assert_eq!(quote["record"]["id"], "QM-20261016-1000");

        let record: Value = server.get("/quotes/QM-20261016-1000").await.json();
        assert_eq!(record["customer"], "Ada Byron");
        assert_eq!(record["premium"], "$1,254.32");
        assert_eq!(record["vehicle"], "2023 Standard");
        assert_eq!(record["date"], "2026-10-16");
        assert_eq!(record["status"], "new");
    }
}

mod record_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_and_get() {
        let server = seeded_server();

        let records: Vec<Value> = server.get("/quotes").await.json();
        assert_eq!(records.len(), 5);
        assert_eq!(records[0]["id"], "Q1001");

        let record: Value = server.get("/quotes/Q1002").await.json();
        assert_eq!(record["customer"], "Sarah Johnson");
    }

    #[tokio::test]
    async fn test_get_unknown_is_404() {
        let response = seeded_server().get("/quotes/Q9999").await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>()["error"], "not_found");
    }

    #[tokio::test]
    async fn test_put_creates_then_merges() {
        let server = server_over(Arc::new(MockQuoteRecordPort::new()));

        let created: Value = server
            .put("/quotes/Q2000")
            .json(&json!({ "customer": "Jane Doe" }))
            .await
            .json();
        assert_eq!(created, json!({ "id": "Q2000", "customer": "Jane Doe" }));

        let merged: Value = server
            .put("/quotes/Q2000")
            .json(&json!({ "status": "contacted" }))
            .await
            .json();
        assert_eq!(merged["customer"], "Jane Doe");
        assert_eq!(merged["status"], "contacted");
    }

    #[tokio::test]
    async fn test_put_rejects_bad_zip() {
        let response = seeded_server()
            .put("/quotes/Q1001")
            .json(&json!({ "zip": "123" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_email_marks_contacted() {
        let server = seeded_server();

        let response = server.post("/quotes/Q1001/email").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["record"]["status"], "contacted");

        let record: Value = server.get("/quotes/Q1001").await.json();
        assert_eq!(record["status"], "contacted");
    }

    #[tokio::test]
    async fn test_email_unknown_is_404() {
        let server = seeded_server();

        let response = server.post("/quotes/Q9999/email").await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        let records: Vec<Value> = server.get("/quotes").await.json();
        assert_eq!(records.len(), 5);
    }

    #[tokio::test]
    async fn test_delete() {
        let server = seeded_server();

        let removed: Value = server.delete("/quotes/Q1003").await.json();
        assert_eq!(removed["customer"], "Michael Brown");

        assert_eq!(
            server.delete("/quotes/Q1003").await.status_code(),
            StatusCode::NOT_FOUND
        );
        let ids: Vec<String> = server
            .get("/quotes")
            .await
            .json::<Vec<Value>>()
            .iter()
            .map(|record| record["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["Q1001", "Q1002", "Q1004", "Q1005"]);
    }

    /// Records written through the API survive a new router over the same file
    #[tokio::test]
    async fn test_snapshot_store_persists() {
        let store = TempStore::new();
        server_over(store.empty_port())
            .put("/quotes/Q2000")
            .json(&json!({ "customer": "Jane Doe" }))
            .await
            .assert_status_ok();

        let record: Value = server_over(store.empty_port())
            .get("/quotes/Q2000")
            .await
            .json();
        assert_eq!(record["customer"], "Jane Doe");
    }
}
