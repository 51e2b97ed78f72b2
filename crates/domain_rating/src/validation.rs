//! Quote request validation
//!
//! Turns a [`RawQuoteRequest`] into a typed [`QuoteRequest`], collecting every
//! problem rather than stopping at the first.
//!
//! # Validation Rules
//!
//! - Age must be between 16 and 120
//! - Vehicle year must be within the last twenty years, or next year's model
//! - ZIP code must be exactly five ASCII digits
//! - Every categorical field must carry one of its listed labels

use chrono::{Datelike, NaiveDate};
use std::str::FromStr;

use crate::error::RatingError;
use crate::request::{
    CarOwnership, CoverageLevel, DrivingFrequency, HomeOwnership, MaritalStatus, QuoteRequest,
    RawQuoteRequest, VehicleCategory, VehicleValue,
};

/// Youngest insurable driver
pub const MIN_DRIVER_AGE: i32 = 16;

/// Oldest insurable driver
pub const MAX_DRIVER_AGE: i32 = 120;

/// Oldest insurable model year, relative to the current year
pub const MAX_VEHICLE_AGE_YEARS: i32 = 20;

/// Length of a US ZIP code
pub const ZIP_CODE_LEN: usize = 5;

/// Result of request validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the request is valid
    pub is_valid: bool,
    /// List of validation errors
    pub errors: Vec<String>,
    /// List of validation warnings (non-fatal issues)
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    /// Adds a warning to the result
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Converts into `Err(MalformedInput)` when any error was recorded
    pub fn into_result(self) -> Result<(), RatingError> {
        if self.is_valid {
            Ok(())
        } else {
            Err(RatingError::malformed(self.errors))
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// A request that passed validation, with any non-fatal notes about it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub request: QuoteRequest,
    pub warnings: Vec<String>,
}

/// Inclusive range of model years accepted on `today`
pub fn vehicle_year_range(today: NaiveDate) -> (i32, i32) {
    let current_year = today.year();
    (current_year - MAX_VEHICLE_AGE_YEARS, current_year + 1)
}

/// Returns true for a five-digit ZIP code
pub fn is_valid_zip_code(zip_code: &str) -> bool {
    zip_code.len() == ZIP_CODE_LEN && zip_code.bytes().all(|b| b.is_ascii_digit())
}

/// Validator for incoming quote requests
pub struct QuoteRequestValidator;

impl QuoteRequestValidator {
    /// Validates and types a raw request
    ///
    /// # Arguments
    ///
    /// * `raw` - The request as received
    /// * `today` - Date the year bounds are computed from
    ///
    /// # Returns
    ///
    /// The typed request, or `MalformedInput` carrying every reason it was
    /// rejected
    pub fn validate(raw: &RawQuoteRequest, today: NaiveDate) -> Result<QuoteRequest, RatingError> {
        Self::validate_with_warnings(raw, today).map(|validated| validated.request)
    }

    /// Validates a raw request, keeping the warnings raised along the way
    ///
    /// Warnings never reject a request. A next-year model is accepted with
    /// a warning.
    pub fn validate_with_warnings(
        raw: &RawQuoteRequest,
        today: NaiveDate,
    ) -> Result<ValidatedRequest, RatingError> {
        let mut result = ValidationResult::ok();

        Self::validate_numbers(raw, today, &mut result);
        if !is_valid_zip_code(&raw.zip_code) {
            result.add_error("ZIP code must be a 5-digit number");
        }

        let vehicle_category = parse_option::<VehicleCategory>(&raw.vehicle_category, &mut result);
        let coverage_level = parse_option::<CoverageLevel>(&raw.coverage_level, &mut result);
        let marital_status = parse_option::<MaritalStatus>(&raw.marital_status, &mut result);
        let home_ownership = parse_option::<HomeOwnership>(&raw.home_ownership, &mut result);
        let car_ownership = parse_option::<CarOwnership>(&raw.car_ownership, &mut result);
        let vehicle_value = parse_option::<VehicleValue>(&raw.vehicle_value, &mut result);
        let driving_frequency = parse_option::<DrivingFrequency>(&raw.driving_frequency, &mut result);

        match (
            vehicle_category,
            coverage_level,
            marital_status,
            home_ownership,
            car_ownership,
            vehicle_value,
            driving_frequency,
            u32::try_from(raw.age),
        ) {
            (
                Some(vehicle_category),
                Some(coverage_level),
                Some(marital_status),
                Some(home_ownership),
                Some(car_ownership),
                Some(vehicle_value),
                Some(driving_frequency),
                Ok(age),
            ) if result.is_valid => Ok(ValidatedRequest {
                request: QuoteRequest {
                    vehicle_category,
                    vehicle_year: raw.vehicle_year,
                    coverage_level,
                    marital_status,
                    age,
                    home_ownership,
                    car_ownership,
                    vehicle_value,
                    driving_frequency,
                    zip_code: raw.zip_code.clone(),
                },
                warnings: result.warnings,
            }),
            _ => {
                result.into_result()?;
                Err(RatingError::malformed(vec!["Invalid quote request".to_string()]))
            }
        }
    }

    fn validate_numbers(raw: &RawQuoteRequest, today: NaiveDate, result: &mut ValidationResult) {
        if !(MIN_DRIVER_AGE..=MAX_DRIVER_AGE).contains(&raw.age) {
            result.add_error(format!(
                "Age must be between {} and {}",
                MIN_DRIVER_AGE, MAX_DRIVER_AGE
            ));
        }

        let (min_year, max_year) = vehicle_year_range(today);
        if raw.vehicle_year < min_year || raw.vehicle_year > max_year {
            result.add_error(format!(
                "Vehicle year must be between {} and {}",
                min_year, max_year
            ));
        } else if raw.vehicle_year == max_year {
            result.add_warning(format!("Vehicle year {} is next year's model", max_year));
        }
    }
}

fn parse_option<T>(label: &str, result: &mut ValidationResult) -> Option<T>
where
    T: FromStr<Err = RatingError>,
{
    match label.parse::<T>() {
        Ok(option) => Some(option),
        Err(err) => {
            result.add_error(err.to_string());
            None
        }
    }
}
