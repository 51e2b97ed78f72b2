//! Quote identifiers
//!
//! Quote ids have the shape `QM-YYYYMMDD-NNNN`: the pricing date followed by
//! a four-digit suffix in `1000..=9999`. The suffix is random in production;
//! generation sits behind [`QuoteIdGenerator`] so tests can supply a
//! deterministic sequence.

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU16, Ordering};

use crate::error::CoreError;

/// Prefix carried by every quote identifier
pub const QUOTE_ID_PREFIX: &str = "QM";

/// Smallest suffix a quote identifier may carry
pub const MIN_SUFFIX: u16 = 1000;

/// Largest suffix a quote identifier may carry
pub const MAX_SUFFIX: u16 = 9999;

/// Identifier minted for each computed quote
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuoteId {
    date: NaiveDate,
    suffix: u16,
}

impl QuoteId {
    /// Creates an identifier for the given date and suffix
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the suffix is not four digits
    pub fn new(date: NaiveDate, suffix: u16) -> Result<Self, CoreError> {
        if !(MIN_SUFFIX..=MAX_SUFFIX).contains(&suffix) {
            return Err(CoreError::validation(format!(
                "Quote id suffix {} must be between {} and {}",
                suffix, MIN_SUFFIX, MAX_SUFFIX
            )));
        }
        Ok(Self { date, suffix })
    }

    /// Returns the pricing date encoded in the identifier
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the four-digit suffix
    pub fn suffix(&self) -> u16 {
        self.suffix
    }
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            QUOTE_ID_PREFIX,
            self.date.format("%Y%m%d"),
            self.suffix
        )
    }
}

impl FromStr for QuoteId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::validation(format!("Invalid quote id: {}", s));

        let rest = s
            .strip_prefix(QUOTE_ID_PREFIX)
            .and_then(|r| r.strip_prefix('-'))
            .ok_or_else(invalid)?;
        let (date_part, suffix_part) = rest.split_once('-').ok_or_else(invalid)?;
        if !is_digits(date_part, 8) || !is_digits(suffix_part, 4) {
            return Err(invalid());
        }

        let date = NaiveDate::parse_from_str(date_part, "%Y%m%d").map_err(|_| invalid())?;
        let suffix: u16 = suffix_part.parse().map_err(|_| invalid())?;

        Self::new(date, suffix)
    }
}

/// Returns true if `s` is exactly `len` ASCII digits
fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

impl TryFrom<String> for QuoteId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<QuoteId> for String {
    fn from(id: QuoteId) -> String {
        id.to_string()
    }
}

/// Mints quote identifiers
pub trait QuoteIdGenerator: Send + Sync + fmt::Debug {
    /// Returns a fresh identifier for a quote priced on `date`
    fn generate(&self, date: NaiveDate) -> QuoteId;
}

/// Generator drawing a uniformly random four-digit suffix
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomQuoteIdGenerator;

impl QuoteIdGenerator for RandomQuoteIdGenerator {
    fn generate(&self, date: NaiveDate) -> QuoteId {
        let suffix = rand::thread_rng().gen_range(MIN_SUFFIX..=MAX_SUFFIX);
        QuoteId { date, suffix }
    }
}

/// Generator handing out suffixes in ascending order, wrapping after 9999
#[derive(Debug)]
pub struct SequentialQuoteIdGenerator {
    next: AtomicU16,
}

impl SequentialQuoteIdGenerator {
    /// Creates a generator whose first suffix is `start`, clamped into range
    pub fn starting_at(start: u16) -> Self {
        Self {
            next: AtomicU16::new(start.clamp(MIN_SUFFIX, MAX_SUFFIX)),
        }
    }
}

impl Default for SequentialQuoteIdGenerator {
    fn default() -> Self {
        Self::starting_at(MIN_SUFFIX)
    }
}

impl QuoteIdGenerator for SequentialQuoteIdGenerator {
    fn generate(&self, date: NaiveDate) -> QuoteId {
        let suffix = self
            .next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                Some(if current >= MAX_SUFFIX { MIN_SUFFIX } else { current + 1 })
            })
            .unwrap_or(MIN_SUFFIX);
        QuoteId { date, suffix }
    }
}
