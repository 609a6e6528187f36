//! Request evaluation: surface validation, encode, predict, assess.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use retention::{assess, RetentionAction, RiskLevel};
use scoring::{
    ChurnClassifier, ChurnModel, ContractType, CustomerProfile, FeatureVector, ModelError,
    NetworkTechnology, Region, ServicePlan,
};

use crate::config::AnalyzerConfig;

const LOW_RISK_NOTE: &str =
    "Monitoring recommended, but immediate retention effort is not necessary.";

/// One evaluation request, as received on the line protocol. Categorical
/// fields parse from their surface labels; unknown labels fail the request.
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationRequest {
    pub tenure_months: u32,
    pub monthly_charges_etb: f64,
    pub support_calls_3m: u32,
    pub outage_score: u8,
    pub region: Region,
    pub contract: ContractType,
    pub network_technology: NetworkTechnology,
    pub service_plan: ServicePlan,
}

impl EvaluationRequest {
    /// Enforce the documented input bounds. The core encoder treats bounds
    /// as the surface's contract, so every request passes through here
    /// before a profile is built.
    pub fn into_profile(self) -> Result<CustomerProfile, RequestError> {
        if !(1..=84).contains(&self.tenure_months) {
            return Err(RequestError::out_of_range("tenure_months", "1..=84"));
        }
        if !(100.0..=3000.0).contains(&self.monthly_charges_etb) {
            return Err(RequestError::out_of_range(
                "monthly_charges_etb",
                "100.0..=3000.0",
            ));
        }
        if self.support_calls_3m > 10 {
            return Err(RequestError::out_of_range("support_calls_3m", "0..=10"));
        }
        if self.outage_score > 5 {
            return Err(RequestError::out_of_range("outage_score", "0..=5"));
        }

        Ok(CustomerProfile {
            tenure_months: self.tenure_months,
            monthly_charges_etb: self.monthly_charges_etb,
            support_calls_3m: self.support_calls_3m,
            outage_score: self.outage_score,
            region: self.region,
            contract: self.contract,
            technology: self.network_technology,
            plan: self.service_plan,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct FeatureContribution {
    pub column: String,
    pub contribution: f64,
}

/// What the output surface renders for one request.
#[derive(Debug, Serialize)]
pub struct EvaluationReport {
    pub risk: RiskLevel,
    pub churn_probability: f64,
    pub actions: Vec<RetentionAction>,
    pub top_features: Vec<FeatureContribution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

#[derive(Debug)]
pub enum RequestError {
    OutOfRange {
        field: &'static str,
        allowed: &'static str,
    },
    Parse(serde_json::Error),
}

impl RequestError {
    fn out_of_range(field: &'static str, allowed: &'static str) -> Self {
        Self::OutOfRange { field, allowed }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { field, allowed } => {
                write!(f, "{field} out of range (allowed {allowed})")
            }
            Self::Parse(e) => write!(f, "malformed request: {e}"),
        }
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

/// Owns the loaded classifier for the lifetime of the process. Read-only
/// after construction; evaluation is synchronous, one request at a time.
pub struct AnalyzerRuntime {
    classifier: ChurnClassifier,
}

impl AnalyzerRuntime {
    pub fn new(config: &AnalyzerConfig) -> Result<Self, ModelError> {
        let model = ChurnModel::from_file(&config.model_path)?;
        let classifier = ChurnClassifier::with_model(model)?;
        info!(
            model_id = %classifier.model_id(),
            model_version = %classifier.model_version(),
            threshold = classifier.threshold(),
            "churn model loaded"
        );
        Ok(Self { classifier })
    }

    #[cfg(test)]
    fn with_classifier(classifier: ChurnClassifier) -> Self {
        Self { classifier }
    }

    pub fn evaluate_line(&self, line: &str) -> Result<EvaluationReport, RequestError> {
        let request: EvaluationRequest =
            serde_json::from_str(line).map_err(RequestError::Parse)?;
        self.evaluate(request)
    }

    pub fn evaluate(&self, request: EvaluationRequest) -> Result<EvaluationReport, RequestError> {
        let profile = request.into_profile()?;
        let features = FeatureVector::encode(&profile);
        let churn = self.classifier.predict(&features);
        let probability = self.classifier.predict_proba(&features);
        let verdict = assess(churn, probability, &profile);

        info!(
            risk = ?verdict.risk,
            probability = verdict.probability,
            actions = verdict.actions.len(),
            "evaluation complete"
        );

        let note = match verdict.risk {
            RiskLevel::Low => Some(LOW_RISK_NOTE),
            RiskLevel::High => None,
        };
        let top_features = self
            .classifier
            .explain(&features)
            .into_iter()
            .map(|(column, contribution)| FeatureContribution {
                column,
                contribution,
            })
            .collect();

        Ok(EvaluationReport {
            risk: verdict.risk,
            churn_probability: verdict.probability,
            actions: verdict.actions,
            top_features,
            note,
        })
    }
}
