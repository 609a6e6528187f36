use crate::schema::{
    FEATURE_COUNT, IDX_MONTHLY_CHARGES, IDX_OUTAGE_SCORE, IDX_SUPPORT_CALLS, IDX_TENURE_MONTHS,
    IDX_TOTAL_CHARGES,
};
use crate::types::CustomerProfile;

/// Complete ordered model input, aligned 1:1 with `FEATURE_COLUMNS`.
///
/// The encoder is the sole writer of vector order; once built the vector is
/// immutable and handed to the classifier as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    /// Encode a profile into the model's feature space.
    ///
    /// Deterministic and total: identical profiles produce bit-identical
    /// vectors, and no in-bounds profile has an error path.
    pub fn encode(profile: &CustomerProfile) -> Self {
        let mut values = [0.0f64; FEATURE_COUNT];

        values[IDX_TENURE_MONTHS] = f64::from(profile.tenure_months);
        values[IDX_MONTHLY_CHARGES] = profile.monthly_charges_etb;
        values[IDX_SUPPORT_CALLS] = f64::from(profile.support_calls_3m);
        values[IDX_OUTAGE_SCORE] = f64::from(profile.outage_score);
        values[IDX_TOTAL_CHARGES] = profile.total_charges_etb();

        // One-hot groups: each group contributes at most one indicator, at
        // the position its category table declares. Base categories yield
        // None (except the technology base, which maps onto the 5G column).
        let indicators = [
            profile.region.indicator_index(),
            profile.contract.indicator_index(),
            profile.plan.indicator_index(),
            profile.technology.indicator_index(),
        ];
        for idx in indicators.into_iter().flatten() {
            values[idx] = 1.0;
        }

        Self { values }
    }
}
