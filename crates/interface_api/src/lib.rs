//! HTTP API Layer
//!
//! This crate provides the REST API for the quoting system using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Quote calculation, rating catalog and back-office records
//! - **Middleware**: Tracing, CORS, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let state = AppState::from_config(config);
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_rating::PricingEngine;
use domain_records::RecordService;
use infra_store::{QuoteRecordRepository, SnapshotQuoteRecordAdapter};

use crate::config::ApiConfig;
use crate::handlers::{health, rating, records};
use crate::middleware::audit_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<PricingEngine>,
    pub records: RecordService,
    pub config: ApiConfig,
}

impl AppState {
    /// Creates state from its parts
    pub fn new(engine: PricingEngine, records: RecordService, config: ApiConfig) -> Self {
        Self {
            engine: Arc::new(engine),
            records,
            config,
        }
    }

    /// Creates state backed by the snapshot store named in `config`
    ///
    /// Prices against the system clock with random quote ids.
    pub fn from_config(config: ApiConfig) -> Self {
        let repository = if config.seed_store {
            QuoteRecordRepository::new(config.store_path.clone())
        } else {
            QuoteRecordRepository::unseeded(config.store_path.clone())
        };
        let records = RecordService::new(Arc::new(SnapshotQuoteRecordAdapter::new(repository)));
        Self::new(PricingEngine::new(), records, config)
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Pricing engine, record service and configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Service status
    let health_routes = Router::new()
        .route("/", get(health::health_check))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Quote calculation and reference data
    let rating_routes = Router::new()
        .route("/calculate-quote", post(rating::calculate_quote))
        .route("/vehicle-years", get(rating::vehicle_years))
        .route("/vehicle-categories", get(rating::vehicle_categories))
        .route("/coverage-levels", get(rating::coverage_levels))
        .route("/marital-statuses", get(rating::marital_statuses))
        .route("/home-ownership-options", get(rating::home_ownership_options))
        .route("/car-ownership-options", get(rating::car_ownership_options))
        .route("/vehicle-value-ranges", get(rating::vehicle_value_ranges))
        .route("/driving-frequency-options", get(rating::driving_frequency_options))
        .route("/coverage-explanation", get(rating::coverage_explanation))
        .route("/pricing-factors", get(rating::pricing_factors))
        .route("/discounts", get(rating::discounts))
        .route("/sample-quote-request", get(rating::sample_quote_request));

    // Back-office records
    let record_routes = Router::new()
        .route("/", get(records::list_quotes))
        .route(
            "/:id",
            get(records::get_quote)
                .put(records::update_quote)
                .delete(records::delete_quote),
        )
        .route("/:id/email", post(records::email_customer));

    Router::new()
        .merge(health_routes)
        .merge(rating_routes)
        .nest("/quotes", record_routes)
        .layer(axum_middleware::from_fn(audit_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
