//! Inference over a frozen model

use serde::Serialize;
use std::fmt;

use super::features::FeatureVector;
use super::model::Model;

/// Decision threshold on the spam probability
pub const SPAM_THRESHOLD: f64 = 0.5;

pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Predicted class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Label {
    Spam,
    Legitimate,
}

impl Label {
    /// Binary encoding used by the trainer and metrics (1 = spam)
    pub fn as_binary(self) -> u8 {
        match self {
            Label::Spam => 1,
            Label::Legitimate => 0,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Spam => write!(f, "Spam"),
            Label::Legitimate => write!(f, "Legitimate"),
        }
    }
}

/// Scoring result for one document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub label: Label,
    /// Probability of spam. Strictly inside (0, 1) for moderate scores;
    /// f64 rounds it to exactly 1.0 once the linear score exceeds ~37
    /// (and to 0.0 below ~-745).
    pub probability: f64,
    /// `max(p, 1 - p)`, always in [0.5, 1]
    pub confidence: f64,
}

/// Stateless scorer borrowing a model
#[derive(Debug, Clone, Copy)]
pub struct Predictor<'a> {
    model: &'a Model,
}

impl<'a> Predictor<'a> {
    pub fn new(model: &'a Model) -> Self {
        Self { model }
    }

    pub fn predict(&self, text: &str) -> Prediction {
        self.predict_features(&FeatureVector::from_text(text))
    }

    pub fn predict_features(&self, features: &FeatureVector) -> Prediction {
        let probability = sigmoid(self.model.linear_score(features));
        let label = if probability > SPAM_THRESHOLD {
            Label::Spam
        } else {
            Label::Legitimate
        };

        Prediction {
            label,
            probability,
            confidence: probability.max(1.0 - probability),
        }
    }

    /// Spam probability only
    pub fn probability(&self, text: &str) -> f64 {
        self.predict(text).probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::model::default_model;
    use std::collections::HashMap;

    #[test]
    fn test_sigmoid() {
        assert_eq!(sigmoid(0.0), 0.5);
        assert!(sigmoid(4.0) > 0.98);
        assert!(sigmoid(-4.0) < 0.02);
    }

    #[test]
    fn test_winner_is_spam() {
        let prediction = Predictor::new(default_model()).predict("WINNER! Claim your free prize now");
        assert_eq!(prediction.label, Label::Spam);
        assert!(prediction.probability > 0.5);
        assert_eq!(prediction.confidence, prediction.probability);
    }

    #[test]
    fn test_team_update_is_legitimate() {
        let prediction =
            Predictor::new(default_model()).predict("Hi team, thanks for the update on the project");
        assert_eq!(prediction.label, Label::Legitimate);
        assert!(prediction.probability < 0.5);
        assert_eq!(prediction.confidence, 1.0 - prediction.probability);
    }

    #[test]
    fn test_bounds_hold_for_moderate_scores() {
        let predictor = Predictor::new(default_model());
        for text in ["", "zebra", "free free free cash", "thanks regards meeting", "!!!"] {
            let p = predictor.predict(text);
            assert!(p.probability > 0.0 && p.probability < 1.0, "text: {text:?}");
            assert!((0.5..=1.0).contains(&p.confidence), "text: {text:?}");
        }
    }

    #[test]
    fn test_large_scores_saturate() {
        let text = "winner ".repeat(40);
        let prediction = Predictor::new(default_model()).predict(&text);
        assert_eq!(prediction.probability, 1.0);
        assert_eq!(prediction.confidence, 1.0);
        assert_eq!(prediction.label, Label::Spam);
    }

    #[test]
    fn test_exactly_half_is_legitimate() {
        let model = Model::new(HashMap::new(), 0.0, 0.5);
        let prediction = Predictor::new(&model).predict("anything at all");
        assert_eq!(prediction.probability, 0.5);
        assert_eq!(prediction.label, Label::Legitimate);
        assert_eq!(prediction.confidence, 0.5);
    }

    #[test]
    fn test_label_display() {
        assert_eq!(Label::Spam.to_string(), "Spam");
        assert_eq!(Label::Legitimate.to_string(), "Legitimate");
        assert_eq!(Label::Spam.as_binary(), 1);
    }
}
