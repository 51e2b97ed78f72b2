//! Rating DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_rating::{Quote, RawQuoteRequest};
use domain_records::{QuoteRecord, QuoteRecordPatch};

/// Body of `POST /calculate-quote`
///
/// The quote fields sit at the top level. Contact details are optional and
/// only stored when `save_record` is set.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CalculateQuoteRequest {
    #[serde(flatten)]
    pub quote: RawQuoteRequest,
    #[validate(length(min = 1, max = 100))]
    pub customer: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 7, max = 30))]
    pub phone: Option<String>,
    #[serde(default)]
    pub save_record: bool,
}

impl CalculateQuoteRequest {
    /// The contact fields as a record patch
    pub fn contact_patch(&self) -> QuoteRecordPatch {
        let mut patch = QuoteRecordPatch::new();
        patch.customer = self.customer.clone();
        patch.email = self.email.clone();
        patch.phone = self.phone.clone();
        patch
    }
}

/// Response of `POST /calculate-quote`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateQuoteResponse {
    #[serde(flatten)]
    pub quote: Quote,
    /// Present when the quote was saved as a back-office record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<QuoteRecord>,
    /// Non-fatal notes raised while validating the request
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoverageExplanationQuery {
    pub coverage_level: Option<String>,
}

/// Service status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}
