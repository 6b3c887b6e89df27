//! Model persistence
//!
//! The artifact is a JSON record:
//!
//! ```json
//! { "weights": [["prize", 1.1], ["thanks", -0.5]], "bias": -0.5, "baselineScore": 0.5 }
//! ```
//!
//! `baselineScore` may be omitted and then reads back as 0.5.

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::model::{Model, DEFAULT_BASELINE_SCORE};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    pub weights: Vec<(String, f64)>,
    pub bias: f64,
    #[serde(rename = "baselineScore", default, skip_serializing_if = "Option::is_none")]
    pub baseline_score: Option<f64>,
}

impl From<&Model> for ModelRecord {
    fn from(model: &Model) -> Self {
        let mut weights: Vec<(String, f64)> = model
            .weights()
            .iter()
            .map(|(token, &weight)| (token.clone(), weight))
            .collect();
        weights.sort_by(|a, b| a.0.cmp(&b.0));

        Self {
            weights,
            bias: model.bias(),
            baseline_score: Some(model.baseline_score()),
        }
    }
}

impl From<ModelRecord> for Model {
    fn from(record: ModelRecord) -> Self {
        Model::new(
            record.weights.into_iter().collect(),
            record.bias,
            record.baseline_score.unwrap_or(DEFAULT_BASELINE_SCORE),
        )
    }
}

pub fn to_json(model: &Model) -> Result<String> {
    Ok(serde_json::to_string_pretty(&ModelRecord::from(model))?)
}

pub fn from_json(json: &str) -> Result<Model> {
    let record: ModelRecord = serde_json::from_str(json)?;
    Ok(record.into())
}

/// Write the model atomically: the artifact at `path` is either the old
/// file or the complete new one, never a partial write.
pub fn save(model: &Model, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        serde_json::to_writer_pretty(&mut writer, &ModelRecord::from(model))?;
        writer.flush()?;
    }
    temp_file.as_file().sync_all()?;
    temp_file.persist(path).map_err(|e| e.error)?;

    info!(
        "Saved model with {} weights to '{}'",
        model.vocabulary_size(),
        path.display()
    );
    Ok(())
}

pub fn load(path: &Path) -> Result<Model> {
    let file = File::open(path)?;
    let record: ModelRecord = serde_json::from_reader(BufReader::new(file))?;
    debug!("Loaded {} weights from '{}'", record.weights.len(), path.display());
    Ok(record.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::model::default_model;
    use crate::error::SpamError;
    use std::collections::HashMap;

    #[test]
    fn test_round_trip_is_exact() {
        let weights: HashMap<String, f64> = [
            ("alpha", 0.1 + 0.2),
            ("beta", -1.0 / 3.0),
            ("gamma", 1e-300),
            ("delta", 123456.789012345),
        ]
        .into_iter()
        .map(|(t, w)| (t.to_string(), w))
        .collect();
        let model = Model::new(weights, -0.123456789123456789, 0.25);

        let restored = from_json(&to_json(&model).unwrap()).unwrap();
        assert_eq!(restored, model);
    }

    #[test]
    fn test_weights_written_in_token_order() {
        let record = ModelRecord::from(default_model());
        let tokens: Vec<&str> = record.weights.iter().map(|(t, _)| t.as_str()).collect();
        let mut sorted = tokens.clone();
        sorted.sort();
        assert_eq!(tokens, sorted);
    }

    #[test]
    fn test_json_field_names() {
        let json: serde_json::Value =
            serde_json::from_str(&to_json(default_model()).unwrap()).unwrap();
        assert!(json["weights"].is_array());
        assert_eq!(json["weights"][0][0], "account");
        assert_eq!(json["bias"], -0.5);
        assert_eq!(json["baselineScore"], 0.5);
    }

    #[test]
    fn test_missing_baseline_defaults() {
        let model = from_json(r#"{ "weights": [["cash", 0.9]], "bias": -0.5 }"#).unwrap();
        assert_eq!(model.baseline_score(), DEFAULT_BASELINE_SCORE);
        assert_eq!(model.weight("cash"), 0.9);
        assert_eq!(model.bias(), -0.5);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(from_json("{ \"weights\": 3 }"), Err(SpamError::Json(_))));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("model.json");

        save(default_model(), &path).unwrap();
        let loaded = load(&path).unwrap();
        assert_eq!(&loaded, default_model());

        let leftovers = fs::read_dir(path.parent().unwrap()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(load(&dir.path().join("absent.json")), Err(SpamError::Io(_))));
    }
}
