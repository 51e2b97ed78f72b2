//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the relevant fields and inherit the sample request for
//! everything else.

use domain_rating::{
    CarOwnership, CoverageLevel, DrivingFrequency, HomeOwnership, MaritalStatus, QuoteRequest,
    RawQuoteRequest, VehicleCategory, VehicleValue,
};
use domain_records::{QuoteRecord, QuoteRecordPatch};

use crate::fixtures::RequestFixtures;

/// Builder for constructing quote requests
#[derive(Debug, Clone)]
pub struct QuoteRequestBuilder {
    request: QuoteRequest,
}

impl Default for QuoteRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteRequestBuilder {
    /// Creates a builder starting from the sample request
    pub fn new() -> Self {
        Self {
            request: RequestFixtures::sample(),
        }
    }

    pub fn vehicle_category(mut self, category: VehicleCategory) -> Self {
        self.request.vehicle_category = category;
        self
    }

    pub fn vehicle_year(mut self, year: i32) -> Self {
        self.request.vehicle_year = year;
        self
    }

    pub fn coverage_level(mut self, level: CoverageLevel) -> Self {
        self.request.coverage_level = level;
        self
    }

    pub fn marital_status(mut self, status: MaritalStatus) -> Self {
        self.request.marital_status = status;
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.request.age = age;
        self
    }

    pub fn home_ownership(mut self, ownership: HomeOwnership) -> Self {
        self.request.home_ownership = ownership;
        self
    }

    pub fn car_ownership(mut self, ownership: CarOwnership) -> Self {
        self.request.car_ownership = ownership;
        self
    }

    pub fn vehicle_value(mut self, value: VehicleValue) -> Self {
        self.request.vehicle_value = value;
        self
    }

    pub fn driving_frequency(mut self, frequency: DrivingFrequency) -> Self {
        self.request.driving_frequency = frequency;
        self
    }

    pub fn zip_code(mut self, zip_code: impl Into<String>) -> Self {
        self.request.zip_code = zip_code.into();
        self
    }

    /// Builds the typed request
    pub fn build(self) -> QuoteRequest {
        self.request
    }

    /// Builds the request in its untyped wire form
    pub fn build_raw(self) -> RawQuoteRequest {
        RawQuoteRequest::from(&self.request)
    }
}

/// Builder for constructing quote records
#[derive(Debug, Clone)]
pub struct QuoteRecordBuilder {
    id: String,
    patch: QuoteRecordPatch,
}

impl QuoteRecordBuilder {
    /// Creates a builder for a record holding only `id`
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            patch: QuoteRecordPatch::new(),
        }
    }

    pub fn customer(mut self, customer: &str) -> Self {
        self.patch = self.patch.customer(customer);
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.patch = self.patch.email(email);
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.patch = self.patch.status(status);
        self
    }

    pub fn premium(mut self, premium: &str) -> Self {
        self.patch = self.patch.premium(premium);
        self
    }

    pub fn zip(mut self, zip: &str) -> Self {
        self.patch = self.patch.zip(zip);
        self
    }

    /// Builds the record
    pub fn build(self) -> QuoteRecord {
        QuoteRecord::from_patch(self.id, self.patch)
    }
}
