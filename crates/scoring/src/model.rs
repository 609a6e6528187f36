//! Classifier artifact loading and validation.
//!
//! Two artifact formats are accepted:
//! - the native runtime format: positional weight vector aligned with
//!   `FEATURE_COLUMNS`;
//! - the training-pipeline export: named weight map keyed by feature column,
//!   converted to positional form on load.
//!
//! Validation happens once, at load time. A mismatch between the artifact's
//! declared schema and `FEATURE_COLUMNS` is fatal here rather than surfacing
//! as silently wrong predictions at request time.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::schema::{FEATURE_COLUMNS, FEATURE_COUNT};

/// Serializable model weights — loaded from JSON at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChurnModel {
    /// Human-readable model identifier.
    pub model_id: String,
    /// Semantic version of the trained artifact.
    pub model_version: String,
    /// Weight vector (length = FEATURE_COUNT), positional per FEATURE_COLUMNS.
    pub weights: Vec<f64>,
    /// Bias (intercept) term.
    pub bias: f64,
    /// Decision threshold: probability ≥ threshold → churn predicted.
    pub threshold: f64,
    /// Feature names declared by the artifact. When present, must match
    /// FEATURE_COLUMNS exactly in names and order.
    #[serde(default)]
    pub feature_names: Vec<String>,
}

/// Training-pipeline export format (named weights, as produced by the
/// offline Python pipeline). Features absent from `FEATURE_COLUMNS` are
/// ignored; columns the export does not name get weight 0.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportedModel {
    pub model_version: String,
    pub features: Vec<String>,
    pub weights: HashMap<String, f64>,
    pub bias: f64,
    #[serde(default)]
    pub threshold: Option<f64>,
    #[serde(default)]
    pub training_samples: usize,
}

impl ExportedModel {
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        serde_json::from_str(json).map_err(ModelError::ParseJson)
    }

    /// Convert to the positional runtime form.
    pub fn to_runtime_model(&self) -> ChurnModel {
        let mut weights = vec![0.0f64; FEATURE_COUNT];
        for (i, name) in FEATURE_COLUMNS.iter().enumerate() {
            if let Some(&w) = self.weights.get(*name) {
                weights[i] = w;
            }
        }

        ChurnModel {
            model_id: format!("export-{}", self.model_version),
            model_version: self.model_version.clone(),
            weights,
            bias: self.bias,
            threshold: self.threshold.unwrap_or(0.5),
            feature_names: FEATURE_COLUMNS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ChurnModel {
    /// Load from JSON, auto-detecting export vs native format.
    pub fn from_json_auto(json: &str) -> Result<Self, ModelError> {
        // The export format carries a "features" list but no "model_id".
        if json.contains("\"features\"") && !json.contains("\"model_id\"") {
            if let Ok(export) = ExportedModel::from_json(json) {
                let model = export.to_runtime_model();
                model.validate()?;
                return Ok(model);
            }
        }
        Self::from_json(json)
    }

    /// Load the native format from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let model: Self = serde_json::from_str(json).map_err(ModelError::ParseJson)?;
        model.validate()?;
        Ok(model)
    }

    /// Load from a JSON file path, auto-detecting the format.
    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path).map_err(ModelError::Io)?;
        Self::from_json_auto(&content)
    }

    /// Validate structural soundness and the declared schema.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.weights.len() != FEATURE_COUNT {
            return Err(ModelError::DimensionMismatch {
                expected: FEATURE_COUNT,
                got: self.weights.len(),
            });
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ModelError::InvalidThreshold(self.threshold));
        }
        for (i, &w) in self.weights.iter().enumerate() {
            if !w.is_finite() {
                return Err(ModelError::NonFiniteWeight { index: i, value: w });
            }
        }
        if !self.bias.is_finite() {
            return Err(ModelError::NonFiniteBias(self.bias));
        }

        // Startup schema assertion: artifacts that declare their feature
        // names must agree with FEATURE_COLUMNS in both name and position.
        // Artifacts without declared names are accepted on length alone.
        if !self.feature_names.is_empty() {
            if self.feature_names.len() != FEATURE_COUNT {
                return Err(ModelError::DimensionMismatch {
                    expected: FEATURE_COUNT,
                    got: self.feature_names.len(),
                });
            }
            for (i, (declared, expected)) in self
                .feature_names
                .iter()
                .zip(FEATURE_COLUMNS.iter())
                .enumerate()
            {
                if declared != expected {
                    return Err(ModelError::SchemaMismatch {
                        index: i,
                        declared: declared.clone(),
                        expected,
                    });
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum ModelError {
    DimensionMismatch {
        expected: usize,
        got: usize,
    },
    SchemaMismatch {
        index: usize,
        declared: String,
        expected: &'static str,
    },
    InvalidThreshold(f64),
    NonFiniteWeight {
        index: usize,
        value: f64,
    },
    NonFiniteBias(f64),
    ParseJson(serde_json::Error),
    Io(std::io::Error),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { expected, got } => {
                write!(f, "weight dimension mismatch: expected {expected}, got {got}")
            }
            Self::SchemaMismatch {
                index,
                declared,
                expected,
            } => write!(
                f,
                "feature schema mismatch at column {index}: artifact declares {declared:?}, runtime expects {expected:?}"
            ),
            Self::InvalidThreshold(t) => write!(f, "threshold {t} not in [0, 1]"),
            Self::NonFiniteWeight { index, value } => {
                write!(f, "non-finite weight at index {index}: {value}")
            }
            Self::NonFiniteBias(b) => write!(f, "non-finite bias: {b}"),
            Self::ParseJson(e) => write!(f, "model JSON parse error: {e}"),
            Self::Io(e) => write!(f, "model file IO error: {e}"),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ParseJson(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}
