//! Rating handlers
//!
//! Quote calculation and the reference data quoting front ends render:
//! option lists, coverage and factor explanations, and a sample request.

use axum::{
    extract::{Query, State},
    Json,
};
use tracing::info;
use validator::Validate;

use domain_rating::catalog::{
    self, CoverageExplanation, DiscountExplanation, FactorExplanation,
};
use domain_rating::{
    CarOwnership, CoverageLevel, DrivingFrequency, HomeOwnership, MaritalStatus,
    QuoteRequestValidator, RawQuoteRequest, VehicleCategory, VehicleValue,
};
use domain_records::QuoteSummary;

use crate::dto::rating::{CalculateQuoteRequest, CalculateQuoteResponse, CoverageExplanationQuery};
use crate::{error::ApiError, AppState};

/// Validates and prices a quote request
///
/// With `save_record` set, the quote is also stored as a back-office record
/// under its quote id.
pub async fn calculate_quote(
    State(state): State<AppState>,
    Json(payload): Json<CalculateQuoteRequest>,
) -> Result<Json<CalculateQuoteResponse>, ApiError> {
    payload.validate()?;

    let today = state.engine.clock().today();
    let validated = QuoteRequestValidator::validate_with_warnings(&payload.quote, today)?;
    let quote = state.engine.price(&validated.request);

    let record = if payload.save_record {
        let summary = QuoteSummary {
            quoted_on: quote.generated_at.date_naive(),
            vehicle: quote.vehicle_description(),
            coverage: quote.request.coverage_level.to_string(),
            premium: quote.final_premium,
            zip: quote.request.zip_code.clone(),
        };
        let record = state
            .records
            .record_quote(&quote.quote_id.to_string(), &summary, payload.contact_patch())
            .await?;
        Some(record)
    } else {
        None
    };

    info!(
        quote_id = %quote.quote_id,
        final_premium = %quote.final_premium,
        saved = record.is_some(),
        warnings = validated.warnings.len(),
        "Calculated quote"
    );

    Ok(Json(CalculateQuoteResponse {
        quote,
        record,
        warnings: validated.warnings,
    }))
}

/// Model years offered for selection, newest first
pub async fn vehicle_years(State(state): State<AppState>) -> Json<Vec<i32>> {
    Json(catalog::available_vehicle_years(state.engine.clock().today()))
}

pub async fn vehicle_categories() -> Json<Vec<&'static str>> {
    Json(VehicleCategory::labels())
}

pub async fn coverage_levels() -> Json<Vec<&'static str>> {
    Json(CoverageLevel::labels())
}

pub async fn marital_statuses() -> Json<Vec<&'static str>> {
    Json(MaritalStatus::labels())
}

pub async fn home_ownership_options() -> Json<Vec<&'static str>> {
    Json(HomeOwnership::labels())
}

pub async fn car_ownership_options() -> Json<Vec<&'static str>> {
    Json(CarOwnership::labels())
}

pub async fn vehicle_value_ranges() -> Json<Vec<&'static str>> {
    Json(VehicleValue::labels())
}

pub async fn driving_frequency_options() -> Json<Vec<&'static str>> {
    Json(DrivingFrequency::labels())
}

/// Explains each coverage, optionally for a single level
///
/// An unknown `coverage_level` is rejected with the accepted labels.
pub async fn coverage_explanation(
    Query(query): Query<CoverageExplanationQuery>,
) -> Result<Json<CoverageExplanation>, ApiError> {
    let level = query
        .coverage_level
        .as_deref()
        .map(str::parse::<CoverageLevel>)
        .transpose()?;
    Ok(Json(catalog::coverage_explanation(level)))
}

pub async fn pricing_factors() -> Json<Vec<FactorExplanation>> {
    Json(catalog::pricing_factors_explanation())
}

pub async fn discounts() -> Json<Vec<DiscountExplanation>> {
    Json(catalog::discount_explanations())
}

/// A ready-to-submit request for the current year
pub async fn sample_quote_request(State(state): State<AppState>) -> Json<RawQuoteRequest> {
    Json(catalog::sample_quote_request(state.engine.clock().today()))
}
