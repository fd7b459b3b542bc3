//! Survey data loading.
//!
//! The loader trusts its input: numeric fields are coerced loosely and never
//! validated, and any I/O or CSV failure is reported as
//! [`ChartError::LoadFailure`](crate::error::ChartError::LoadFailure) without
//! retry.

mod csv_source;

pub use csv_source::{CsvDataSource, parse_data_points};

use serde::{Deserialize, Serialize};

use crate::core::DataPoint;
use crate::error::ChartResult;

/// Anything able to produce the full, ordered data set in one call.
pub trait DataSource {
    fn load(&self) -> ChartResult<Vec<DataPoint>>;

    /// Short description used in logs and load errors.
    fn describe(&self) -> String;
}

/// Pre-parsed rows, for hosts that fetch and parse on their own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticDataSource {
    points: Vec<DataPoint>,
}

impl StaticDataSource {
    #[must_use]
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self { points }
    }
}

impl DataSource for StaticDataSource {
    fn load(&self) -> ChartResult<Vec<DataPoint>> {
        Ok(self.points.clone())
    }

    fn describe(&self) -> String {
        format!("static({} rows)", self.points.len())
    }
}

/// Column names the loader looks up in the CSV header row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSchema {
    #[serde(default = "default_state_column")]
    pub state_column: String,
    #[serde(default = "default_abbr_column")]
    pub abbr_column: String,
    /// The source data has been seen with both `obesity` and `obsesity`;
    /// this is configurable rather than guessed.
    #[serde(default = "default_obesity_column")]
    pub obesity_column: String,
}

impl Default for DataSchema {
    fn default() -> Self {
        Self {
            state_column: default_state_column(),
            abbr_column: default_abbr_column(),
            obesity_column: default_obesity_column(),
        }
    }
}

impl DataSchema {
    #[must_use]
    pub fn with_obesity_column(mut self, column: impl Into<String>) -> Self {
        self.obesity_column = column.into();
        self
    }
}

fn default_state_column() -> String {
    "state".to_owned()
}

fn default_abbr_column() -> String {
    "abbr".to_owned()
}

fn default_obesity_column() -> String {
    "obesity".to_owned()
}

/// Loose numeric coercion with the rules of a JavaScript `Number(...)` cast.
///
/// Surrounding whitespace is ignored and an empty field is zero. Decimal
/// literals may carry a sign, `Infinity` is accepted with its exact spelling,
/// and unsigned `0x`/`0o`/`0b` literals are read in their radix. Anything else
/// (`inf`, `nan`, `1_000`, a signed hex literal) becomes `NaN`.
#[must_use]
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    if let Some(value) = parse_radix_literal(trimmed) {
        return value;
    }

    let (sign, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (-1.0, &trimmed[1..]),
        b'+' => (1.0, &trimmed[1..]),
        _ => (1.0, trimmed),
    };
    if unsigned == "Infinity" {
        return sign * f64::INFINITY;
    }
    match unsigned.as_bytes().first() {
        Some(first) if first.is_ascii_digit() || *first == b'.' => {
            unsigned.parse::<f64>().map_or(f64::NAN, |value| sign * value)
        }
        _ => f64::NAN,
    }
}

/// `Some` for a `0x`/`0o`/`0b` prefixed literal; `NaN` when its digits are
/// invalid.
fn parse_radix_literal(text: &str) -> Option<f64> {
    let radix = match text.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let value = digits.chars().try_fold(0.0_f64, |acc, ch| {
        ch.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    });
    Some(value.unwrap_or(f64::NAN))
}
