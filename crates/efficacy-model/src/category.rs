//! Efficacy classification buckets.
//!
//! Categories partition the whole rate axis: every defined rate lands in
//! exactly one bucket, and an undefined rate (zero-patient trial, bad
//! counts) always classifies as `Low`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rates at or above this value classify as high efficacy.
pub const HIGH_EFFICACY_THRESHOLD: f64 = 0.8;

/// Rates at or above this value (and below the high threshold) classify
/// as moderate efficacy.
pub const MODERATE_EFFICACY_THRESHOLD: f64 = 0.5;

/// Categorical efficacy label derived from the efficacy rate.
///
/// Boundaries are inclusive on the lower end of each bucket: a rate of
/// exactly 0.8 is `High` and exactly 0.5 is `Moderate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EfficacyCategory {
    /// Rate >= 0.8.
    #[serde(rename = "High Efficacy")]
    High,

    /// 0.5 <= rate < 0.8.
    #[serde(rename = "Moderate Efficacy")]
    Moderate,

    /// Rate < 0.5, plus every undefined rate.
    #[serde(rename = "Low Efficacy")]
    Low,
}

impl EfficacyCategory {
    /// Classify a rate. `None` and NaN both land in `Low`.
    pub fn from_rate(rate: Option<f64>) -> Self {
        match rate {
            Some(value) if value >= HIGH_EFFICACY_THRESHOLD => EfficacyCategory::High,
            Some(value) if value >= MODERATE_EFFICACY_THRESHOLD => EfficacyCategory::Moderate,
            _ => EfficacyCategory::Low,
        }
    }

    /// Returns the label written to output tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            EfficacyCategory::High => "High Efficacy",
            EfficacyCategory::Moderate => "Moderate Efficacy",
            EfficacyCategory::Low => "Low Efficacy",
        }
    }

    /// All categories in descending efficacy order.
    pub fn all() -> [EfficacyCategory; 3] {
        [
            EfficacyCategory::High,
            EfficacyCategory::Moderate,
            EfficacyCategory::Low,
        ]
    }
}

impl fmt::Display for EfficacyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EfficacyCategory {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "High Efficacy" => Ok(EfficacyCategory::High),
            "Moderate Efficacy" => Ok(EfficacyCategory::Moderate),
            "Low Efficacy" => Ok(EfficacyCategory::Low),
            other => Err(format!("unknown efficacy category: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive_on_the_lower_end() {
        assert_eq!(
            EfficacyCategory::from_rate(Some(0.8)),
            EfficacyCategory::High
        );
        assert_eq!(
            EfficacyCategory::from_rate(Some(0.5)),
            EfficacyCategory::Moderate
        );
        assert_eq!(
            EfficacyCategory::from_rate(Some(0.4999)),
            EfficacyCategory::Low
        );
    }

    #[test]
    fn undefined_rates_classify_low() {
        assert_eq!(EfficacyCategory::from_rate(None), EfficacyCategory::Low);
        assert_eq!(
            EfficacyCategory::from_rate(Some(f64::NAN)),
            EfficacyCategory::Low
        );
    }

    #[test]
    fn labels_round_trip() {
        for category in EfficacyCategory::all() {
            let parsed: EfficacyCategory = category.as_str().parse().expect("parse label");
            assert_eq!(parsed, category);
        }
    }
}
