//! Churn scoring — feature schema, encoder, and classifier inference.
//!
//! The model is trained offline (Python pipeline) and distributed as a JSON
//! artifact. The Rust runtime performs only inference — no training, no
//! gradient computation.
//!
//! ```text
//! CustomerProfile ─→ FeatureVector::encode ─→ [x₁..x₁₅] ─→ σ(w·x + b) ─→ churn probability
//! ```

mod engine;
mod features;
mod math;
mod model;
mod schema;
mod types;

pub use engine::ChurnClassifier;
pub use features::FeatureVector;
pub use model::{ChurnModel, ExportedModel, ModelError};
pub use schema::{FEATURE_COLUMNS, FEATURE_COUNT};
pub use types::{ContractType, CustomerProfile, NetworkTechnology, Region, ServicePlan};

#[cfg(test)]
mod tests;
