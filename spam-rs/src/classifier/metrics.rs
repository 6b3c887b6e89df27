//! Binary classification metrics
//!
//! The trainer evaluates on its own training corpus, so these numbers are
//! in-sample and optimistic.

use serde::Serialize;

use crate::error::{Result, SpamError};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub true_positives: usize,
    pub false_positives: usize,
    pub true_negatives: usize,
    pub false_negatives: usize,
}

impl Metrics {
    /// Compare parallel slices of predicted and true labels (1 = spam).
    ///
    /// Zero denominators are floored to 1, so an empty input or a class
    /// that never occurs scores 0 instead of NaN.
    pub fn compute(predicted: &[u8], actual: &[u8]) -> Result<Self> {
        if predicted.len() != actual.len() {
            return Err(SpamError::LengthMismatch {
                predicted: predicted.len(),
                actual: actual.len(),
            });
        }

        let (mut tp, mut fp, mut tn, mut fn_) = (0usize, 0usize, 0usize, 0usize);
        for (&p, &a) in predicted.iter().zip(actual) {
            match (p == 1, a == 1) {
                (true, true) => tp += 1,
                (true, false) => fp += 1,
                (false, false) => tn += 1,
                (false, true) => fn_ += 1,
            }
        }

        let ratio = |num: usize, den: usize| num as f64 / den.max(1) as f64;
        let precision = ratio(tp, tp + fp);
        let recall = ratio(tp, tp + fn_);
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        Ok(Self {
            accuracy: ratio(tp + tn, predicted.len()),
            precision,
            recall,
            f1,
            true_positives: tp,
            false_positives: fp,
            true_negatives: tn,
            false_negatives: fn_,
        })
    }
}
