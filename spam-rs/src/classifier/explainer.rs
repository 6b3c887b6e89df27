//! Per-token contribution ranking
//!
//! Each token's contribution is `weight × count`, i.e. its additive share
//! of the linear score. For a linear model this is the exact decomposition
//! of `z - bias`, but it is NOT a Shapley value estimate: no feature
//! subsets are sampled and no baseline expectation is subtracted. The
//! "shap" name survives only in the wire format.

use serde::Serialize;

use super::features::FeatureVector;
use super::model::Model;

/// Longest explanation returned for one document
pub const MAX_EXPLANATION_ENTRIES: usize = 10;

/// Which class a token pushes towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Contribution {
    Spam,
    Legitimate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplanationEntry {
    pub word: String,
    /// Linear attribution `weight × count`
    pub shap: f64,
    pub contribution: Contribution,
}

#[derive(Debug, Clone, Copy)]
pub struct Explainer<'a> {
    model: &'a Model,
}

impl<'a> Explainer<'a> {
    pub fn new(model: &'a Model) -> Self {
        Self { model }
    }

    pub fn explain(&self, text: &str) -> Vec<ExplanationEntry> {
        self.explain_features(&FeatureVector::from_text(text))
    }

    /// Non-zero contributions, largest magnitude first, at most
    /// [`MAX_EXPLANATION_ENTRIES`]
    pub fn explain_features(&self, features: &FeatureVector) -> Vec<ExplanationEntry> {
        let mut entries: Vec<ExplanationEntry> = features
            .iter()
            .filter_map(|(token, count)| {
                let shap = self.model.weight(token) * f64::from(count);
                if shap == 0.0 {
                    return None;
                }
                Some(ExplanationEntry {
                    word: token.to_string(),
                    shap,
                    contribution: if shap > 0.0 {
                        Contribution::Spam
                    } else {
                        Contribution::Legitimate
                    },
                })
            })
            .collect();

        // Stable sort keeps tied magnitudes in token order
        entries.sort_by(|a, b| b.shap.abs().total_cmp(&a.shap.abs()));
        entries.truncate(MAX_EXPLANATION_ENTRIES);
        entries
    }
}
