//! Linear bag-of-words spam classifier
//!
//! Tokenization, feature extraction, gradient-descent training, scoring,
//! per-token attribution, evaluation metrics and model persistence.

pub mod explainer;
pub mod features;
pub mod metrics;
pub mod model;
pub mod predictor;
pub mod serializer;
pub mod tokenizer;
pub mod trainer;
pub mod vocabulary;

pub use explainer::{Contribution, ExplanationEntry, Explainer, MAX_EXPLANATION_ENTRIES};
pub use features::FeatureVector;
pub use metrics::Metrics;
pub use model::{default_model, Model, DEFAULT_BASELINE_SCORE};
pub use predictor::{sigmoid, Label, Prediction, Predictor};
pub use tokenizer::tokenize;
pub use trainer::{Trainer, TrainingExample, TrainingOutcome, ITERATIONS, LEARNING_RATE};
pub use vocabulary::Vocabulary;
