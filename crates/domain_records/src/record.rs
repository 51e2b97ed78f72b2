//! Quote records
//!
//! A quote record is the back-office view of a quote: who asked, how to reach
//! them, what was quoted and where follow-up stands. Every field except the
//! id is optional, and updates merge field by field.

use serde::{Deserialize, Serialize};

/// Status written when a customer has been emailed about their quote
pub const STATUS_CONTACTED: &str = "contacted";

/// Status written on records created from a freshly priced quote
pub const STATUS_NEW: &str = "new";

/// A persisted back-office quote record
///
/// Stored as a flat JSON object; absent fields are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// Stable unique key, never changed after creation
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage: Option<String>,
    /// Formatted amount, e.g. `$1,234.56`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

impl QuoteRecord {
    /// Creates a record holding only its id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            customer: None,
            email: None,
            phone: None,
            date: None,
            vehicle: None,
            coverage: None,
            premium: None,
            status: None,
            zip: None,
        }
    }

    /// Creates a record from an id and the supplied fields
    pub fn from_patch(id: impl Into<String>, patch: QuoteRecordPatch) -> Self {
        let mut record = Self::new(id);
        record.apply(patch);
        record
    }

    /// Overwrites every field the patch supplies, leaving the rest untouched
    pub fn apply(&mut self, patch: QuoteRecordPatch) {
        let QuoteRecordPatch {
            customer,
            email,
            phone,
            date,
            vehicle,
            coverage,
            premium,
            status,
            zip,
        } = patch;

        merge(&mut self.customer, customer);
        merge(&mut self.email, email);
        merge(&mut self.phone, phone);
        merge(&mut self.date, date);
        merge(&mut self.vehicle, vehicle);
        merge(&mut self.coverage, coverage);
        merge(&mut self.premium, premium);
        merge(&mut self.status, status);
        merge(&mut self.zip, zip);
    }

    /// Returns true once the customer has been contacted
    pub fn is_contacted(&self) -> bool {
        self.status.as_deref() == Some(STATUS_CONTACTED)
    }
}

fn merge(field: &mut Option<String>, update: Option<String>) {
    if let Some(value) = update {
        *field = Some(value);
    }
}

/// A partial update to a quote record
///
/// `None` means "leave as is"; the id is not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecordPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

impl QuoteRecordPatch {
    /// Creates an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customer(mut self, customer: impl Into<String>) -> Self {
        self.customer = Some(customer.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn vehicle(mut self, vehicle: impl Into<String>) -> Self {
        self.vehicle = Some(vehicle.into());
        self
    }

    pub fn coverage(mut self, coverage: impl Into<String>) -> Self {
        self.coverage = Some(coverage.into());
        self
    }

    pub fn premium(mut self, premium: impl Into<String>) -> Self {
        self.premium = Some(premium.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn zip(mut self, zip: impl Into<String>) -> Self {
        self.zip = Some(zip.into());
        self
    }
}
