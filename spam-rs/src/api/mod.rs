//! HTTP scoring API
//!
//! `POST /api/classify` scores a document with the loaded model and
//! returns a per-word explanation. The `shap` values in the response are
//! linear attributions (`weight × count`), not Shapley values.

pub mod handlers;
pub mod server;

pub use handlers::{AppState, ClassifyRequest, ClassifyResponse, ModelSource};
pub use server::ApiServer;
