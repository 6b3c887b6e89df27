//! spam-rs: explainable spam classification
//!
//! A linear bag-of-words classifier trained by batch gradient descent,
//! with per-word explanations of every verdict and a small HTTP API.
//!
//! # Example
//!
//! ```
//! use spam_rs::classifier::{default_model, Explainer, Label, Predictor};
//!
//! let model = default_model();
//! let prediction = Predictor::new(model).predict("WINNER! Claim your free prize now");
//! assert_eq!(prediction.label, Label::Spam);
//!
//! let explanation = Explainer::new(model).explain("WINNER! Claim your free prize now");
//! assert_eq!(explanation[0].word, "winner");
//! ```
//!
//! # Modules
//!
//! - [`classifier`]: tokenizer, trainer, predictor, explainer, metrics, persistence
//! - [`dataset`]: labelled CSV corpus loading
//! - [`api`]: HTTP scoring endpoints
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling

pub mod api;
pub mod classifier;
pub mod config;
pub mod dataset;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SpamError};
