//! API request handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::classifier::{ExplanationEntry, Explainer, Label, Model, Predictor};
use crate::error::{Result, SpamError};

/// Caveat attached to every model description
pub const ATTRIBUTION_NOTE: &str =
    "shap values are linear attributions (weight x count), not Shapley values";

/// Where the served model came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelSource {
    /// Built-in weight table
    Default,
    /// Trained artifact loaded from disk
    Artifact,
}

/// Shared application state. The model is read-only for the process lifetime.
pub struct AppState {
    pub model: Arc<Model>,
    pub source: ModelSource,
}

/// Classification request body
#[derive(Debug, Clone)]
pub struct ClassifyRequest {
    pub text: String,
}

impl ClassifyRequest {
    /// Accept only a JSON object whose `text` is a non-empty string
    pub fn from_value(value: &Value) -> Result<Self> {
        match value.get("text") {
            Some(Value::String(text)) if !text.is_empty() => Ok(Self { text: text.clone() }),
            Some(Value::String(_)) => Err(SpamError::InvalidInput("text is empty".to_string())),
            Some(_) => Err(SpamError::InvalidInput("text must be a string".to_string())),
            None => Err(SpamError::InvalidInput("text is missing".to_string())),
        }
    }
}

/// Classification response body
#[derive(Debug, Clone, Serialize)]
pub struct ClassifyResponse {
    pub prediction: Label,
    pub confidence: f64,
    #[serde(rename = "spamScore")]
    pub spam_score: f64,
    pub shap: Vec<ExplanationEntry>,
}

/// Model description
#[derive(Debug, Serialize)]
pub struct ModelInfo {
    pub source: ModelSource,
    #[serde(rename = "vocabularySize")]
    pub vocabulary_size: usize,
    pub bias: f64,
    #[serde(rename = "baselineScore")]
    pub baseline_score: f64,
    pub attribution: &'static str,
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(msg: &str) -> Self {
        Self {
            error: msg.to_string(),
        }
    }
}

/// Score and explain one document.
///
/// A model carrying non-finite weights yields a NaN score; that is
/// reported as an internal failure rather than a verdict.
pub fn classify_text(model: &Model, text: &str) -> Result<ClassifyResponse> {
    let prediction = Predictor::new(model).predict(text);
    if !prediction.probability.is_finite() {
        return Err(SpamError::Internal(format!(
            "non-finite spam probability {}",
            prediction.probability
        )));
    }

    Ok(ClassifyResponse {
        prediction: prediction.label,
        confidence: prediction.confidence,
        spam_score: prediction.probability,
        shap: Explainer::new(model).explain(text),
    })
}

/// Client errors are echoed generically; everything else is logged and hidden.
fn error_response(err: SpamError) -> Response {
    if err.is_client_error() {
        warn!("Rejected classification request: {}", err);
        (StatusCode::BAD_REQUEST, Json(ApiError::new("Invalid input"))).into_response()
    } else {
        error!("Classification error: {}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::new("Classification failed. Please try again.")),
        )
            .into_response()
    }
}

/// GET /api/health
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// GET /api/model - Describe the loaded model
pub async fn model_info(State(state): State<Arc<AppState>>) -> Json<ModelInfo> {
    Json(ModelInfo {
        source: state.source,
        vocabulary_size: state.model.vocabulary_size(),
        bias: state.model.bias(),
        baseline_score: state.model.baseline_score(),
        attribution: ATTRIBUTION_NOTE,
    })
}

/// POST /api/classify - Score a document and explain the verdict
pub async fn classify(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Response {
    let Json(body) = match payload {
        Ok(body) => body,
        Err(rejection) => {
            return error_response(SpamError::InvalidInput(rejection.body_text()));
        }
    };

    let request = match ClassifyRequest::from_value(&body) {
        Ok(request) => request,
        Err(e) => return error_response(e),
    };

    match classify_text(&state.model, &request.text) {
        Ok(response) => {
            debug!(
                "Classified {} chars as {} (score {:.4})",
                request.text.len(),
                response.prediction,
                response.spam_score
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{default_model, Contribution};
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_request_validation() {
        assert!(ClassifyRequest::from_value(&json!({ "text": "hello" })).is_ok());
        for bad in [json!({}), json!({ "text": 42 }), json!({ "text": "" }), json!("text")] {
            let err = ClassifyRequest::from_value(&bad).unwrap_err();
            assert!(err.is_client_error(), "payload: {bad}");
        }
    }

    #[test]
    fn test_classify_spam_scenario() {
        let response = classify_text(default_model(), "WINNER! Claim your free prize now").unwrap();
        assert_eq!(response.prediction, Label::Spam);
        assert!(response.spam_score > 0.5);
        let top = &response.shap[0];
        assert!(["winner", "prize", "free", "claim"].contains(&top.word.as_str()));
        assert_eq!(top.contribution, Contribution::Spam);
    }

    #[test]
    fn test_response_wire_format() {
        let response = classify_text(default_model(), "Hi team, thanks for the update on the project").unwrap();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["prediction"], "Legitimate");
        assert!(json["spamScore"].as_f64().unwrap() < 0.5);
        assert!(json["confidence"].as_f64().unwrap() >= 0.5);
        assert!(json["shap"].as_array().unwrap().len() <= 10);
    }

    #[test]
    fn test_non_finite_model_is_internal_error() {
        let weights = HashMap::from([("cash".to_string(), f64::NAN)]);
        let model = Model::new(weights, 0.0, 0.5);
        let err = classify_text(&model, "cash").unwrap_err();
        assert!(matches!(err, SpamError::Internal(_)));
        assert!(!err.is_client_error());
    }
}
