use crate::features::FeatureVector;
use crate::math::{dot, sigmoid};
use crate::model::{ChurnModel, ModelError};
use crate::schema::FEATURE_COLUMNS;

/// How many weighted contributions `explain` reports.
const EXPLAIN_TOP: usize = 5;

/// The churn inference engine. Stateless — call `predict` per request.
///
/// Read-only after construction; a shared reference is safe across
/// sequential (or parallel) request evaluations.
#[derive(Debug, Clone)]
pub struct ChurnClassifier {
    model: ChurnModel,
}

impl ChurnClassifier {
    /// Wrap a validated model. Fails on any structural or schema defect so
    /// that no invalid model can ever serve a prediction.
    pub fn with_model(model: ChurnModel) -> Result<Self, ModelError> {
        model.validate()?;
        Ok(Self { model })
    }

    pub fn model_id(&self) -> &str {
        &self.model.model_id
    }

    pub fn model_version(&self) -> &str {
        &self.model.model_version
    }

    pub fn threshold(&self) -> f64 {
        self.model.threshold
    }

    /// Probability of the churn class, in [0, 1].
    pub fn predict_proba(&self, features: &FeatureVector) -> f64 {
        let z = dot(&self.model.weights, &features.values) + self.model.bias;
        sigmoid(z)
    }

    /// Binary churn prediction: true iff the probability reaches the
    /// model's decision threshold.
    pub fn predict(&self, features: &FeatureVector) -> bool {
        self.predict_proba(features) >= self.model.threshold
    }

    /// Top weighted feature contributions for this vector, largest first.
    pub fn explain(&self, features: &FeatureVector) -> Vec<(String, f64)> {
        let mut contributions: Vec<(String, f64)> = FEATURE_COLUMNS
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), self.model.weights[i] * features.values[i]))
            .filter(|(_, c)| c.abs() > f64::EPSILON)
            .collect();
        contributions
            .sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        contributions.truncate(EXPLAIN_TOP);
        contributions
    }
}
