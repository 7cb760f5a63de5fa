// src/inference/ranker.rs
//! Top-K selection and softmax calibration of raw classifier scores.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::error::{Result, SolgraphError};

/// One ranked category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub ordinal: usize,
    pub category: String,
    pub score: f32,
    /// Softmax over the returned subset.
    pub confidence: f64,
}

/// Predictions in descending score order. Confidences sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPrediction {
    pub entries: Vec<Prediction>,
}

impl RankedPrediction {
    #[must_use]
    pub fn top(&self) -> Option<&Prediction> {
        self.entries.first()
    }

    #[must_use]
    pub fn ordinals(&self) -> Vec<usize> {
        self.entries.iter().map(|p| p.ordinal).collect()
    }
}

impl fmt::Display for RankedPrediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.entries.iter().enumerate() {
            writeln!(f, "{}. {} ({:.2}%)", i + 1, p.category, p.confidence * 100.0)?;
        }
        Ok(())
    }
}

/// Ranks the `k` highest `scores` and names them through `names`.
///
/// # Errors
/// Returns `InvalidTopK` if `k` is 0 or exceeds `scores.len()`, `InvalidScore`
/// for a non-finite score, and `InvalidOrdinal` if a selected index has no name.
pub fn rank<S: AsRef<str>>(scores: &[f32], k: usize, names: &[S]) -> Result<RankedPrediction> {
    let selected = top_k(scores, k)?;
    let subset: Vec<f32> = selected.iter().map(|&i| scores[i]).collect();
    let confidences = softmax(&subset);

    let entries = selected
        .into_iter()
        .zip(confidences)
        .map(|(ordinal, confidence)| {
            let category = names
                .get(ordinal)
                .ok_or(SolgraphError::InvalidOrdinal {
                    ordinal,
                    count: names.len(),
                })?
                .as_ref()
                .to_string();
            Ok(Prediction {
                ordinal,
                category,
                score: scores[ordinal],
                confidence,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(RankedPrediction { entries })
}

/// Indices of the `k` highest scores, descending, ties to the lower index.
///
/// # Errors
/// Returns `InvalidTopK` or `InvalidScore`.
pub fn top_k(scores: &[f32], k: usize) -> Result<Vec<usize>> {
    if k == 0 || k > scores.len() {
        return Err(SolgraphError::InvalidTopK {
            k,
            len: scores.len(),
        });
    }
    if let Some(index) = scores.iter().position(|s| !s.is_finite()) {
        return Err(SolgraphError::InvalidScore { index });
    }

    let mut order: Vec<usize> = (0..scores.len()).collect();
    // Stable sort keeps lower indices first among equal scores.
    order.sort_by(|&a, &b| scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal));
    order.truncate(k);
    Ok(order)
}

/// Max-subtracted softmax. Empty input yields an empty output.
#[must_use]
pub fn softmax(values: &[f32]) -> Vec<f64> {
    let max = values
        .iter()
        .copied()
        .map(f64::from)
        .fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = values.iter().map(|&v| (f64::from(v) - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_worked_example() {
        let names = ["a", "b", "c", "d"];
        let ranked = rank(&[0.1, 5.2, 3.3, 0.9], 3, &names).unwrap();
        assert_eq!(ranked.ordinals(), [1, 2, 3]);

        let conf: Vec<f64> = ranked.entries.iter().map(|p| p.confidence).collect();
        for (got, want) in conf.iter().zip([0.8597, 0.1286, 0.0117]) {
            assert!((got - want).abs() < 1e-3, "{got} vs {want}");
        }
        assert!((conf.iter().sum::<f64>() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn ties_prefer_lower_index() {
        assert_eq!(top_k(&[1.0, 2.0, 2.0, 2.0], 2).unwrap(), [1, 2]);
    }

    #[test]
    fn rejects_bad_k_and_scores() {
        assert!(matches!(top_k(&[1.0], 2), Err(SolgraphError::InvalidTopK { k: 2, len: 1 })));
        assert!(matches!(top_k(&[1.0], 0), Err(SolgraphError::InvalidTopK { .. })));
        assert!(matches!(
            top_k(&[1.0, f32::NAN], 1),
            Err(SolgraphError::InvalidScore { index: 1 })
        ));
    }

    #[test]
    fn missing_name_is_an_invalid_ordinal() {
        let err = rank(&[0.0, 1.0], 1, &["only"]).unwrap_err();
        assert!(matches!(err, SolgraphError::InvalidOrdinal { ordinal: 1, count: 1 }));
    }

    #[test]
    fn large_scores_stay_finite() {
        let conf = softmax(&[1000.0, 999.0]);
        assert!(conf.iter().all(|c| c.is_finite()));
        assert!((conf[0] + conf[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn display_matches_cli_format() {
        let ranked = rank(&[2.0, 2.0], 2, &["x", "y"]).unwrap();
        assert_eq!(ranked.to_string(), "1. x (50.00%)\n2. y (50.00%)\n");
    }
}
