//! Rating domain errors
//!
//! The pricing engine itself cannot fail; these errors come from parsing
//! option labels and validating raw requests before pricing.

use thiserror::Error;

/// Errors that can occur before a request reaches the pricing engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatingError {
    /// A categorical field carried a label outside its option set
    #[error("Invalid {field}. Valid options: {valid}")]
    UnknownOption {
        field: &'static str,
        value: String,
        valid: String,
    },

    /// One or more request fields failed validation
    #[error("Malformed quote request: {}", .reasons.join("; "))]
    MalformedInput {
        reasons: Vec<String>,
    },
}

impl RatingError {
    /// Creates an unknown option error listing the accepted labels
    pub fn unknown_option(field: &'static str, value: impl Into<String>, valid: &[&str]) -> Self {
        RatingError::UnknownOption {
            field,
            value: value.into(),
            valid: valid.join(", "),
        }
    }

    /// Creates a malformed input error from collected reasons
    pub fn malformed(reasons: Vec<String>) -> Self {
        RatingError::MalformedInput { reasons }
    }

    /// Returns the human-readable reasons behind this rejection
    pub fn reasons(&self) -> Vec<String> {
        match self {
            RatingError::UnknownOption { .. } => vec![self.to_string()],
            RatingError::MalformedInput { reasons } => reasons.clone(),
        }
    }
}
