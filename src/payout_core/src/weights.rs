use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::default_weights;
use crate::error::{PayoutError, Result};

/// Relative payout shares, one per finishing position.
///
/// Only the first `paid_positions` entries are used for a given field, so a
/// table can be longer than the number of places actually paid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct PayoutWeights {
    weights: Vec<f64>,
}

impl PayoutWeights {
    /// Build a table, rejecting empty lists and negative or non-finite values.
    pub fn new(weights: Vec<f64>) -> Result<Self> {
        validate_weights(&weights)?;
        Ok(PayoutWeights { weights })
    }

    /// Read a comma-separated table such as `35,20,15,10`.
    /// Blank entries are skipped.
    pub fn parse(text: &str) -> Result<Self> {
        let mut weights = Vec::new();
        for entry in text.split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            let value: f64 = entry.parse().map_err(|_| PayoutError::UnparsableWeight {
                entry: entry.to_string(),
            })?;
            weights.push(value);
        }
        Self::new(weights)
    }

    /// Restore the default table.
    pub fn reset(&mut self) {
        self.weights = default_weights();
    }

    /// Weights used when `n` positions are paid.
    pub fn first(&self, n: usize) -> &[f64] {
        &self.weights[..n.min(self.weights.len())]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl Default for PayoutWeights {
    fn default() -> Self {
        PayoutWeights {
            weights: default_weights(),
        }
    }
}

impl TryFrom<Vec<f64>> for PayoutWeights {
    type Error = PayoutError;

    fn try_from(weights: Vec<f64>) -> Result<Self> {
        Self::new(weights)
    }
}

impl From<PayoutWeights> for Vec<f64> {
    fn from(weights: PayoutWeights) -> Self {
        weights.weights
    }
}

impl fmt::Display for PayoutWeights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, w) in self.weights.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            // f64 Display already prints 35.0 as 35
            write!(f, "{}", w)?;
        }
        Ok(())
    }
}

/// Check a raw weight list without taking ownership.
pub fn validate_weights(weights: &[f64]) -> Result<()> {
    if weights.is_empty() {
        return Err(PayoutError::EmptyWeights);
    }
    for (i, &value) in weights.iter().enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(PayoutError::InvalidWeight {
                position: i + 1,
                value,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_WEIGHTS;

    #[test]
    fn test_default_table() {
        let weights = PayoutWeights::default();
        assert_eq!(weights.as_slice(), &DEFAULT_WEIGHTS[..]);
        assert_eq!(weights.len(), 9);
    }

    #[test]
    fn test_parse_skips_blanks_and_whitespace() {
        let weights = PayoutWeights::parse(" 50, 30 ,, 20, ").unwrap();
        assert_eq!(weights.as_slice(), &[50.0, 30.0, 20.0]);
    }

    #[test]
    fn test_parse_fractional() {
        let weights = PayoutWeights::parse("2.5,1.5").unwrap();
        assert_eq!(weights.as_slice(), &[2.5, 1.5]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = PayoutWeights::parse("35,abc,10").unwrap_err();
        assert_eq!(
            err,
            PayoutError::UnparsableWeight {
                entry: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(PayoutWeights::parse(" , ,").unwrap_err(), PayoutError::EmptyWeights);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let err = PayoutWeights::new(vec![10.0, -1.0]).unwrap_err();
        assert_eq!(
            err,
            PayoutError::InvalidWeight {
                position: 2,
                value: -1.0
            }
        );
    }

    #[test]
    fn test_non_finite_weights_rejected() {
        // "nan" and "inf" parse as f64, so validation has to catch them
        let err = PayoutWeights::parse("1,nan").unwrap_err();
        assert!(matches!(
            err,
            PayoutError::InvalidWeight { position: 2, value } if value.is_nan()
        ));

        assert_eq!(
            PayoutWeights::parse("inf,1").unwrap_err(),
            PayoutError::InvalidWeight {
                position: 1,
                value: f64::INFINITY
            }
        );
        assert!(PayoutWeights::new(vec![5.0, f64::NEG_INFINITY]).is_err());
    }

    #[test]
    fn test_zero_weight_allowed() {
        assert!(PayoutWeights::new(vec![0.0, 0.0]).is_ok());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut weights = PayoutWeights::parse("1,1").unwrap();
        weights.reset();
        assert_eq!(weights, PayoutWeights::default());
    }

    #[test]
    fn test_first_caps_at_len() {
        let weights = PayoutWeights::parse("3,2,1").unwrap();
        assert_eq!(weights.first(2), &[3.0, 2.0]);
        assert_eq!(weights.first(10), &[3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_display() {
        let weights = PayoutWeights::parse("35,20,2.5").unwrap();
        assert_eq!(weights.to_string(), "35, 20, 2.5");
    }

    #[test]
    fn test_display_large_weight() {
        let weights = PayoutWeights::new(vec![1e20, 5.0]).unwrap();
        assert_eq!(weights.to_string(), "100000000000000000000, 5");
    }
}
