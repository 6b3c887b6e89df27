//! Frozen linear model and the built-in weight table

use std::collections::HashMap;
use std::sync::OnceLock;

use super::features::FeatureVector;

/// Reference probability carried with every model. Scoring never reads it.
pub const DEFAULT_BASELINE_SCORE: f64 = 0.5;

/// Weight table served when no trained artifact is configured
const DEFAULT_WEIGHTS: &[(&str, f64)] = &[
    ("click", 0.85),
    ("free", 0.92),
    ("winner", 1.2),
    ("congratulations", 0.95),
    ("claim", 0.88),
    ("urgent", 0.78),
    ("act", 0.65),
    ("limited", 0.72),
    ("offer", 0.68),
    ("buy", 0.55),
    ("money", 0.82),
    ("cash", 0.9),
    ("prize", 1.1),
    ("verify", 0.75),
    ("confirm", 0.7),
    ("account", 0.45),
    ("password", 0.8),
    ("update", 0.6),
    ("alert", 0.65),
    ("action", 0.58),
    ("required", 0.62),
    ("immediately", 0.7),
    ("dear", -0.3),
    ("hello", -0.4),
    ("thanks", -0.5),
    ("regards", -0.45),
    ("best", -0.35),
    ("meeting", -0.3),
    ("project", -0.25),
    ("team", -0.2),
];

const DEFAULT_BIAS: f64 = -0.5;

/// Linear model: per-token weights plus a bias.
///
/// Immutable once built. Tokens missing from the weight map score zero,
/// including tokens never seen during training.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    weights: HashMap<String, f64>,
    bias: f64,
    baseline_score: f64,
}

impl Model {
    pub fn new(weights: HashMap<String, f64>, bias: f64, baseline_score: f64) -> Self {
        Self {
            weights,
            bias,
            baseline_score,
        }
    }

    /// Weight for `token`, zero when unknown
    pub fn weight(&self, token: &str) -> f64 {
        self.weights.get(token).copied().unwrap_or(0.0)
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn baseline_score(&self) -> f64 {
        self.baseline_score
    }

    pub fn weights(&self) -> &HashMap<String, f64> {
        &self.weights
    }

    /// Number of tokens carrying an explicit weight
    pub fn vocabulary_size(&self) -> usize {
        self.weights.len()
    }

    /// `bias + Σ weight·count` over the tokens present in `features`
    pub fn linear_score(&self, features: &FeatureVector) -> f64 {
        features
            .iter()
            .fold(self.bias, |z, (token, count)| z + self.weight(token) * f64::from(count))
    }
}

/// Built-in model, initialised on first use and never mutated
pub fn default_model() -> &'static Model {
    static DEFAULT: OnceLock<Model> = OnceLock::new();
    DEFAULT.get_or_init(|| {
        let weights = DEFAULT_WEIGHTS
            .iter()
            .map(|&(token, weight)| (token.to_string(), weight))
            .collect();
        Model::new(weights, DEFAULT_BIAS, DEFAULT_BASELINE_SCORE)
    })
}
