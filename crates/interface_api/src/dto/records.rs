//! Back-office record DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_records::{QuoteRecord, QuoteRecordPatch};

/// Body of `PUT /quotes/:id`; only supplied fields change
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateQuoteRecordRequest {
    #[validate(length(min = 1, max = 100))]
    pub customer: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date: Option<String>,
    pub vehicle: Option<String>,
    pub coverage: Option<String>,
    pub premium: Option<String>,
    #[validate(length(min = 1, max = 32))]
    pub status: Option<String>,
    #[validate(length(equal = 5))]
    pub zip: Option<String>,
}

impl From<UpdateQuoteRecordRequest> for QuoteRecordPatch {
    fn from(request: UpdateQuoteRecordRequest) -> Self {
        QuoteRecordPatch {
            customer: request.customer,
            email: request.email,
            phone: request.phone,
            date: request.date,
            vehicle: request.vehicle,
            coverage: request.coverage,
            premium: request.premium,
            status: request.status,
            zip: request.zip,
        }
    }
}

/// Response of `POST /quotes/:id/email`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailResponse {
    pub message: String,
    pub record: QuoteRecord,
}
