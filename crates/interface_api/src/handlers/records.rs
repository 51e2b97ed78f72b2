//! Back-office record handlers

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use domain_records::{QuoteRecord, QuoteRecordPatch};

use crate::dto::records::{EmailResponse, UpdateQuoteRecordRequest};
use crate::{error::ApiError, AppState};

/// Lists every record in stored order
pub async fn list_quotes(State(state): State<AppState>) -> Result<Json<Vec<QuoteRecord>>, ApiError> {
    Ok(Json(state.records.list().await?))
}

/// Gets a record by id
pub async fn get_quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<QuoteRecord>, ApiError> {
    Ok(Json(state.records.get(&id).await?))
}

/// Creates or partially updates a record
pub async fn update_quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateQuoteRecordRequest>,
) -> Result<Json<QuoteRecord>, ApiError> {
    request.validate()?;
    let patch = QuoteRecordPatch::from(request);
    Ok(Json(state.records.save(&id, patch).await?))
}

/// Deletes a record, returning it
pub async fn delete_quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<QuoteRecord>, ApiError> {
    Ok(Json(state.records.delete(&id).await?))
}

/// Marks the customer as contacted
///
/// Only the record status changes; no message is sent.
pub async fn email_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EmailResponse>, ApiError> {
    let record = state.records.mark_contacted(&id).await?;
    let recipient = record.email.as_deref().unwrap_or("customer").to_string();

    Ok(Json(EmailResponse {
        message: format!("Quote {} marked as contacted ({})", id, recipient),
        record,
    }))
}
