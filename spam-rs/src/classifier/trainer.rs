//! Batch gradient-descent training
//!
//! Every example moves the bias and its token weights by the raw residual
//! `sigmoid(z) - y` scaled by the learning rate (and the token count).
//! No regularisation, shuffling or early stopping.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use tracing::{debug, info};

use super::features::FeatureVector;
use super::metrics::Metrics;
use super::model::{Model, DEFAULT_BASELINE_SCORE};
use super::predictor::{sigmoid, Predictor};
use super::vocabulary::Vocabulary;
use crate::error::{Result, SpamError};

pub const LEARNING_RATE: f64 = 0.01;
pub const ITERATIONS: usize = 100;

/// Upper bound (exclusive) of the uniform initial weights
const INIT_WEIGHT_SCALE: f64 = 0.01;

/// One labelled document (label 1 = spam, 0 = legitimate)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingExample {
    pub text: String,
    pub label: u8,
}

impl TrainingExample {
    pub fn spam(text: impl Into<String>) -> Self {
        Self { text: text.into(), label: 1 }
    }

    pub fn ham(text: impl Into<String>) -> Self {
        Self { text: text.into(), label: 0 }
    }
}

/// Result of a full training run
#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    pub model: Model,
    /// In-sample metrics on the training corpus
    pub metrics: Metrics,
    /// Mean squared residual of every pass, in order
    pub loss_history: Vec<f64>,
}

/// Mutable weights, owned by the trainer until frozen
struct ModelBuilder {
    weights: HashMap<String, f64>,
    bias: f64,
}

impl ModelBuilder {
    fn initialise(vocabulary: &Vocabulary, rng: &mut StdRng) -> Self {
        let weights = vocabulary
            .iter()
            .map(|token| (token.to_string(), rng.gen_range(0.0..INIT_WEIGHT_SCALE)))
            .collect();
        Self { weights, bias: 0.0 }
    }

    fn linear_score(&self, features: &FeatureVector) -> f64 {
        features.iter().fold(self.bias, |z, (token, count)| {
            z + self.weights.get(token).copied().unwrap_or(0.0) * f64::from(count)
        })
    }

    /// Apply one example and return its residual
    fn step(&mut self, features: &FeatureVector, label: u8) -> f64 {
        let error = sigmoid(self.linear_score(features)) - f64::from(label);

        self.bias -= LEARNING_RATE * error;
        for (token, count) in features.iter() {
            let weight = self.weights.entry(token.to_string()).or_insert(0.0);
            *weight -= LEARNING_RATE * error * f64::from(count);
        }

        error
    }

    fn freeze(self) -> Model {
        Model::new(self.weights, self.bias, DEFAULT_BASELINE_SCORE)
    }
}

pub struct Trainer {
    rng: StdRng,
}

impl Trainer {
    /// Trainer with entropy-seeded initial weights
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Trainer with reproducible initial weights
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Train for exactly [`ITERATIONS`] passes over `examples` in order,
    /// then evaluate the frozen model on the same corpus.
    pub fn fit(&mut self, examples: &[TrainingExample]) -> Result<TrainingOutcome> {
        if examples.is_empty() {
            return Err(SpamError::EmptyCorpus);
        }
        if let Some(bad) = examples.iter().find(|e| e.label > 1) {
            return Err(SpamError::InvalidInput(format!(
                "label must be 0 or 1, got {}",
                bad.label
            )));
        }

        let vocabulary = Vocabulary::build(examples.iter().map(|e| e.text.as_str()));
        info!(
            "Training on {} examples, vocabulary of {} tokens",
            examples.len(),
            vocabulary.len()
        );

        // Feature extraction is deterministic, so it is done once up front
        let features: Vec<FeatureVector> = examples
            .iter()
            .map(|e| FeatureVector::from_text(&e.text))
            .collect();

        let mut builder = ModelBuilder::initialise(&vocabulary, &mut self.rng);
        let mut loss_history = Vec::with_capacity(ITERATIONS);

        for iteration in 1..=ITERATIONS {
            let mut squared_error = 0.0;
            for (example, features) in examples.iter().zip(&features) {
                let error = builder.step(features, example.label);
                squared_error += error * error;
            }

            let loss = squared_error / examples.len() as f64;
            debug!("Iteration {}/{}: mse={:.6}", iteration, ITERATIONS, loss);
            loss_history.push(loss);
        }

        let model = builder.freeze();

        let predictor = Predictor::new(&model);
        let predicted: Vec<u8> = features
            .iter()
            .map(|f| predictor.predict_features(f).label.as_binary())
            .collect();
        let actual: Vec<u8> = examples.iter().map(|e| e.label).collect();
        let metrics = Metrics::compute(&predicted, &actual)?;

        info!(
            "Training complete: accuracy={:.4} precision={:.4} recall={:.4}",
            metrics.accuracy, metrics.precision, metrics.recall
        );

        Ok(TrainingOutcome {
            model,
            metrics,
            loss_history,
        })
    }
}

impl Default for Trainer {
    fn default() -> Self {
        Self::new()
    }
}
